use crate::catalog::RowKind;

/// One worksheet row of a statement template.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateRecord {
    pub row_index: u32,
    pub kind: RowKind,
    /// Display label, indented by hierarchy level.
    pub item: String,
    /// Populated for summary rows only.
    pub summary: String,
    pub normalized: String,
    pub summary_index: Option<u32>,
}
