/// Unqualified name of a qualified type name, as Java's `Class::getSimpleName`
/// reports it: package and enclosing classes dropped, array suffixes kept.
///
/// Anonymous classes (`Outer$1`) have an empty simple name; local classes
/// (`Outer$1Local`) lose their numeric prefix.
pub fn simple_name(qualified: &str) -> &str {
    let (element, _) = split_array_suffix(qualified);
    let start = element
        .rfind(|c: char| c == '.' || c == '$')
        .map(|i| i + 1)
        .unwrap_or(0);
    let local = &qualified[start..];
    if element[..start].ends_with('$') {
        local.trim_start_matches(|c: char| c.is_ascii_digit())
    } else {
        local
    }
}

/// Splits `a.B[][]` into (`a.B`, `[][]`).
pub fn split_array_suffix(name: &str) -> (&str, &str) {
    let mut element = name;
    while let Some(stripped) = element.strip_suffix("[]") {
        element = stripped;
    }
    (element, &name[element.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_is_dropped() {
        assert_eq!(simple_name("com.vmware.vcloud.api.VmType"), "VmType");
        assert_eq!(simple_name("VmType"), "VmType");
        assert_eq!(simple_name("int"), "int");
    }

    #[test]
    fn test_nested_classes() {
        assert_eq!(simple_name("com.acme.Outer$Inner"), "Inner");
        assert_eq!(simple_name("com.acme.Outer.Inner"), "Inner");
        assert_eq!(simple_name("com.acme.Outer$1Local"), "Local");
        assert_eq!(simple_name("com.acme.Outer$1"), "");
    }

    #[test]
    fn test_arrays_keep_suffix() {
        assert_eq!(simple_name("java.lang.String[]"), "String[]");
        assert_eq!(simple_name("com.acme.Outer$Inner[][]"), "Inner[][]");
        assert_eq!(split_array_suffix("int[][]"), ("int", "[][]"));
    }
}
