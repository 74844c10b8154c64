pub mod string {
    use heapless::String;

    pub const NAME_LEN: usize = 15; // bytes kept from a button name

    pub type ButtonName = String<NAME_LEN>;

    /// Copies `name` into a fixed buffer, silently dropping whatever does not
    /// fit. Cuts only on a character boundary.
    pub fn button_name(name: &str) -> ButtonName {
        let mut result = ButtonName::new();
        for c in name.chars() {
            if result.push(c).is_err() {
                break;
            }
        }
        result
    }

    /// Compares a stored name with a caller supplied one, cut the same way.
    pub fn same_name(stored: &str, name: &str) -> bool {
        stored == button_name(name).as_str()
    }

}
