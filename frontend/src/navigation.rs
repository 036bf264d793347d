//! Pure pathname helpers for sidebar highlighting and content styling

/// Sidebar menu key for a pathname.
///
/// Only the four top-level section paths map to a key; everything else
/// (including detail pages like `/user/3`) yields the literal `"undefined"`,
/// which selects no menu entry. The sidebar consumes the result as a
/// single-element selection, so at most one entry is highlighted.
pub fn menu_key(pathname: &str) -> String {
    match pathname {
        "/user" => "1",
        "/business" => "2",
        "/visit" => "3",
        "/contract" => "4",
        _ => "undefined",
    }
    .to_owned()
}

/// True when the pathname is a contract detail page: first segment
/// `contract`, second segment a non-empty run of ASCII digits.
///
/// Purely cosmetic; it only suppresses the content region's background.
pub fn is_contract_detail(pathname: &str) -> bool {
    let mut segments = pathname.split('/').skip(1);
    matches!(
        (segments.next(), segments.next()),
        (Some("contract"), Some(id)) if !id.is_empty() && id.bytes().all(|byte| byte.is_ascii_digit())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_paths_map_to_their_keys() {
        assert_eq!(menu_key("/user"), "1");
        assert_eq!(menu_key("/business"), "2");
        assert_eq!(menu_key("/visit"), "3");
        assert_eq!(menu_key("/contract"), "4");
    }

    #[test]
    fn other_paths_select_nothing() {
        assert_eq!(menu_key("/"), "undefined");
        assert_eq!(menu_key("/user/3"), "undefined");
        assert_eq!(menu_key("/contract/42"), "undefined");
        assert_eq!(menu_key("/sign_in"), "undefined");
    }

    #[test]
    fn contract_detail_requires_numeric_id() {
        assert!(is_contract_detail("/contract/42"));
        assert!(is_contract_detail("/contract/0"));
        assert!(!is_contract_detail("/contract"));
        assert!(!is_contract_detail("/contract/"));
        assert!(!is_contract_detail("/contract/abc"));
        assert!(!is_contract_detail("/contract/42a"));
        assert!(!is_contract_detail("/user/42"));
    }
}
