/// One entry of a searchable picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    /// Value stored in the form when picked
    pub value: String,
    /// Text shown in the list
    pub label: String,
    /// Whether this is the current field value (rendered with a check mark)
    pub selected: bool,
}

/// Keeps the options whose label contains `query`, ignoring case.
///
/// Surrounding whitespace in the query is ignored and an empty query keeps
/// every option. Order is preserved.
pub fn filter_options(options: Vec<OptionItem>, query: &str) -> Vec<OptionItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options;
    }

    options
        .into_iter()
        .filter(|option| option.label.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(label: &str) -> OptionItem {
        OptionItem {
            value: label.to_string(),
            label: label.to_string(),
            selected: false,
        }
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let options = vec![option("CS"), option("MATH")];
        assert_eq!(filter_options(options.clone(), "  "), options);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let options = vec![option("101 - Intro"), option("201 - Data Structures"), option("MATH")];
        let filtered = filter_options(options, "data");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].label, "201 - Data Structures");
    }

    #[test]
    fn test_no_match() {
        assert!(filter_options(vec![option("CS")], "bio").is_empty());
    }
}
