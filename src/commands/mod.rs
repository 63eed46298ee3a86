pub type CmdResult<T> = stylescale::Result<(T, i32)>;

pub mod scale;

/// Run the scale command and map its result to JSON.
pub(crate) fn run_json(args: scale::ScaleArgs) -> (stylescale::Result<serde_json::Value>, i32) {
    crate::tty::status("stylescale is working...");
    crate::output::map_cmd_result_to_json(scale::run(args))
}
