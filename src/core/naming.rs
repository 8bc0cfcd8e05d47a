//! # Naming Transforms
//!
//! Column identifiers and object attributes rarely share a naming style:
//! backing stores use `USER_ID` or `user_id`, objects use `user_id` or
//! `userId` depending on where they came from. These transforms bridge
//! the two. Both are pure and deterministic.

/// Convert a column-style identifier to the attribute naming convention
/// used for lookup: lower snake_case.
///
/// - `USER_ID` -> `user_id`
/// - `orgId` -> `org_id`
/// - `user_id` -> `user_id` (already in target style)
pub fn to_attr_name(identifier: &str) -> String {
    // Snake or shouty identifiers just fold case; only camel needs splitting
    if identifier.contains('_') || !identifier.chars().any(|c| c.is_lowercase()) {
        return identifier.to_lowercase();
    }
    let mut out = String::with_capacity(identifier.len() + 4);
    for c in identifier.chars() {
        if c.is_uppercase() {
            if !out.is_empty() {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a column-style identifier (snake or shouty snake) to lower
/// camelCase, for record shapes keyed in that convention.
///
/// - `USER_ID` -> `userId`
/// - `org_name` -> `orgName`
pub fn to_lower_camel(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut upper_next = false;
    for c in identifier.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_name_from_shouty_snake() {
        assert_eq!(to_attr_name("USER_ID"), "user_id");
    }

    #[test]
    fn test_attr_name_from_camel() {
        assert_eq!(to_attr_name("orgId"), "org_id");
        assert_eq!(to_attr_name("parentDictId"), "parent_dict_id");
    }

    #[test]
    fn test_attr_name_is_idempotent_on_target_style() {
        assert_eq!(to_attr_name("user_id"), "user_id");
        assert_eq!(to_attr_name(&to_attr_name("orgId")), "org_id");
    }

    #[test]
    fn test_lower_camel() {
        assert_eq!(to_lower_camel("USER_ID"), "userId");
        assert_eq!(to_lower_camel("org_name"), "orgName");
        assert_eq!(to_lower_camel("id"), "id");
    }
}
