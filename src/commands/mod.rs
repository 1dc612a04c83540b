pub type CmdResult<T> = borderfix::Result<(T, i32)>;

pub mod rewrite;
