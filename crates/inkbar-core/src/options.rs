//! Static option lists for the font dropdowns.

use std::ops::RangeInclusive;

/// Font families offered in the font-name dropdown, in display order.
pub const FONT_LIST: [&str; 7] = [
    "Arial",
    "Verdana",
    "Times New Roman",
    "Garamond",
    "Georgia",
    "Courier New",
    "Cursive",
];

/// Sizes accepted by the host `fontSize` command.
pub const FONT_SIZES: RangeInclusive<u8> = 1..=7;

/// Body text size, selected after the size dropdown is populated.
pub const DEFAULT_FONT_SIZE: u8 = 3;

/// One `<option>` of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// Option whose label is its value.
    pub fn same(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

pub fn font_name_options() -> Vec<SelectOption> {
    FONT_LIST.iter().map(|f| SelectOption::same(*f)).collect()
}

pub fn font_size_options() -> Vec<SelectOption> {
    FONT_SIZES.map(|s| SelectOption::same(s.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_names_in_order() {
        let opts = font_name_options();
        let values: Vec<_> = opts.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(
            values,
            [
                "Arial",
                "Verdana",
                "Times New Roman",
                "Garamond",
                "Georgia",
                "Courier New",
                "Cursive"
            ]
        );
        assert!(opts.iter().all(|o| o.value == o.label));
    }

    #[test]
    fn test_font_sizes_ascending() {
        let opts = font_size_options();
        let values: Vec<_> = opts.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["1", "2", "3", "4", "5", "6", "7"]);
        assert!(opts.iter().all(|o| o.value == o.label));
        assert!(FONT_SIZES.contains(&DEFAULT_FONT_SIZE));
    }
}
