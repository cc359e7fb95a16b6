/// Identification metadata for a use case.
pub trait UseCaseMetadata {
    /// Index, e.g. "u101"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "import_employees"
    fn usecase_name() -> &'static str;

    /// Display name for the UI
    fn display_name() -> &'static str;

    /// Full name of the form "u101_import_employees"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
