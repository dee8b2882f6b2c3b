// crates/ports/src/line_source.rs
use word_tally_shared_kernel::InfraResult;

/// Finite, one-pass sequence of text lines.
///
/// Lines are yielded without their terminator. A source cannot be rewound.
pub trait LineSource {
    /// Where the lines come from, for diagnostics (`Hamlet.txt`, `<stdin>`).
    fn origin(&self) -> &str;

    /// Next line, or `Ok(None)` once the source is exhausted.
    fn next_line(&mut self) -> InfraResult<Option<String>>;
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn origin(&self) -> &str {
        (**self).origin()
    }

    fn next_line(&mut self) -> InfraResult<Option<String>> {
        (**self).next_line()
    }
}
