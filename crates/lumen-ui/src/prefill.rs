//! Profile form prefill record

use crate::Color;

/// Values used to pre-populate the connection profile form.
///
/// Plain value object: no validation, no behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefillInfo {
    pub name: String,
    pub color: Color,
    pub type_index: usize,
    pub country_index: usize,
    pub server_index: usize,
}

impl PrefillInfo {
    pub fn new(
        name: &str,
        color: Color,
        type_index: usize,
        country_index: usize,
        server_index: usize,
    ) -> Self {
        Self {
            name: name.to_string(),
            color,
            type_index,
            country_index,
            server_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_semantics() {
        let a = PrefillInfo::new("Home", Color::ACCENT, 0, 3, 1);
        let b = a.clone();
        assert_eq!(a, b);

        let c = PrefillInfo::new("Work", Color::ACCENT, 0, 3, 1);
        assert_ne!(a, c);
    }
}
