//! Length rule chains for the plain text fields.

/// Required → min length → max length, checked on the trimmed value.
///
/// Lengths count characters, not bytes.
#[derive(Debug, Clone, Copy)]
pub struct LengthRules {
    pub required: &'static str,
    pub min: Option<(usize, &'static str)>,
    pub max: (usize, &'static str),
}

impl LengthRules {
    /// First violated rule, if any.
    pub fn check(&self, value: &str) -> Option<&'static str> {
        let value = value.trim();
        if value.is_empty() {
            return Some(self.required);
        }

        let len = value.chars().count();
        if let Some((min, message)) = self.min {
            if len < min {
                return Some(message);
            }
        }
        let (max, message) = self.max;
        (len > max).then_some(message)
    }
}

pub const NAME_RULES: LengthRules = LengthRules {
    required: "Team name is required",
    min: Some((2, "Team name must be at least 2 characters")),
    max: (100, "Team name must be less than 100 characters"),
};

pub const DESCRIPTION_RULES: LengthRules = LengthRules {
    required: "Description is required",
    min: Some((10, "Description must be at least 10 characters")),
    max: (500, "Description must be less than 500 characters"),
};

pub const CODE_RULES: LengthRules = LengthRules {
    required: "Team code is required",
    min: Some((3, "Code must be at least 3 characters")),
    max: (5, "Code must be at most 5 characters"),
};

pub const ENTITY_RULES: LengthRules = LengthRules {
    required: "Entity is required",
    min: None,
    max: (100, "Entity name must be less than 100 characters"),
};

pub const MANAGER_RULES: LengthRules = LengthRules {
    required: "Manager is required",
    min: None,
    max: (100, "Manager name must be less than 100 characters"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_characters_not_bytes() {
        // 100 two-byte characters is still within the name limit
        let name = "é".repeat(100);
        assert_eq!(NAME_RULES.check(&name), None);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(
            CODE_RULES.check("  AB  "),
            Some("Code must be at least 3 characters")
        );
        assert_eq!(CODE_RULES.check("  ABC  "), None);
    }

    #[test]
    fn test_optional_minimum() {
        assert_eq!(ENTITY_RULES.check("X"), None);
        assert_eq!(
            MANAGER_RULES.check(&"m".repeat(101)),
            Some("Manager name must be less than 100 characters")
        );
    }
}
