//! Write command - stamp a value into a target file

use crate::cli::args::WriteArgs;
use crate::error::VerstampResult;
use crate::writer::WriteRequest;

/// Execute the write command
pub async fn execute(args: WriteArgs) -> VerstampResult<()> {
    let request = WriteRequest::new(args.target, args.value);
    println!("{}", request.message());
    request.apply()
}
