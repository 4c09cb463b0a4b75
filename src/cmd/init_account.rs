use crate::prompt::style;

pub fn handle() {
    println!("{}", style::warn("This feature is not implemented yet!"));
    println!("./sio-gd init-account");
}
