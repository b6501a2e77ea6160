use nuvalidate::nu::report::ValidationReport;

pub fn run_parse_case(raw: &str) -> ValidationReport {
    ValidationReport::parse(raw).expect("payload should parse")
}

macro_rules! parse_case {
    (
        $fn_name:ident,
        $raw:expr,
        errors: $errors:expr,
        warnings: $warnings:expr,
        indeterminate: $indeterminate:expr,
        types: $types:expr
    ) => {
        #[test]
        fn $fn_name() {
            let report = crate::helpers::run_parse_case($raw);
            assert_eq!(report.error_count(), $errors, "{}", stringify!($fn_name));
            assert_eq!(report.warning_count(), $warnings, "{}", stringify!($fn_name));
            assert_eq!(
                report.is_result_indeterminate(),
                $indeterminate,
                "{}",
                stringify!($fn_name)
            );
            let types: Vec<&str> = report
                .messages()
                .iter()
                .map(|m| m.message_type.as_str())
                .collect();
            assert_eq!(types, $types, "{}", stringify!($fn_name));
        }
    };
}
