/// Tab-repeat counts that right-pad each string to a common column at a
/// tab width of 8. The longest string always gets one tab.
pub fn calculate_tabs<S: AsRef<str>>(strings: &[S]) -> Vec<usize> {
    let max = strings.iter().map(|s| s.as_ref().len()).max().unwrap_or(0);

    strings
        .iter()
        .map(|s| (max - s.as_ref().len()) / 8 + 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_project_names_to_a_common_column() {
        let offsets = calculate_tabs(&[
            "sipgateio-incomingcall-node",
            "io-labs-2fa-service",
            "sipgateio-incomingcall-python",
            "a",
        ]);

        assert_eq!(offsets, vec![1, 2, 1, 4]);
    }

    #[test]
    fn every_offset_is_at_least_one() {
        let offsets = calculate_tabs(&["abc", "a", "abcdefghijklmnop"]);
        assert!(offsets.iter().all(|offset| *offset >= 1));
    }

    #[test]
    fn a_single_string_gets_one_tab() {
        assert_eq!(calculate_tabs(&["anything"]), vec![1]);
    }

    #[test]
    fn an_empty_list_yields_no_offsets() {
        assert_eq!(calculate_tabs::<&str>(&[]), Vec::<usize>::new());
    }
}
