pub type CmdResult<T> = rebrand::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    /// Emit the JSON envelope instead of progress lines.
    pub json: bool,
}

pub mod replace;
