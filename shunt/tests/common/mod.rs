use shunt::{Ident, OptionMap, TOGGLE_KEY, ToggleDescriptor};

/// Build a test identifier.
pub fn ident(text: &str) -> Ident {
    Ident::new(text).expect("test identifier")
}

/// Toy rendition of a host mapping layer's naming convention: trim a
/// plural `s`, then type-case.
pub fn type_hint(name: &Ident) -> String {
    let text = name.as_str();
    let singular = text.strip_suffix('s').unwrap_or(text);
    let mut hint = String::with_capacity(singular.len());
    let mut boundary = true;
    for ch in singular.chars() {
        if ch == '_' {
            boundary = true;
        } else if boundary {
            hint.push(ch.to_ascii_uppercase());
            boundary = false;
        } else {
            hint.push(ch);
        }
    }
    hint
}

/// A declaration option map carrying a complete toggle descriptor.
pub fn toggle_options(feature: &str, on: OptionMap, off: OptionMap) -> OptionMap {
    let mut options = OptionMap::new();
    options.insert(
        TOGGLE_KEY,
        ToggleDescriptor::for_feature(ident(feature))
            .with_on(on)
            .with_off(off),
    );
    options
}
