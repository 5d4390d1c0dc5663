use crate::pass::Shuffle;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub save: bool,
    pub default: bool,
    pub length: Option<i64>,
    pub number: Option<usize>,
    pub shuffle: Option<Shuffle>,
}
