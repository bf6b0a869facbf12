use std::fmt::Write as _;
use std::io::{self, Write};

use chrono::{DateTime, Local};
use partition::PartitionPlan;

/// Well-known name of the generated artifact, as the allocator includes it.
pub const HEADER_FILE_NAME: &str = "array_arena_cfg.h";

/// Renders the generated C header: one `BLOCKS_<size>_LIST_INIT_LEN`
/// constant per configured block size plus a gap comment, wrapped in the
/// include guard the allocator expects under `USE_EXTERNAL_INIT_LENS`.
///
/// The timestamp is passed in so rendering stays deterministic for a
/// given input.
pub fn header_content(
    plan: &PartitionPlan,
    hdr_name: &str,
    generated_at: DateTime<Local>,
) -> String {
    let stamp = generated_at.format("%a, %b %d, %Y :: %H:%M:%S %p %Z");
    let mut out = String::new();
    let _ = writeln!(out, "/**");
    let _ = writeln!(out, " * @file {hdr_name}");
    let _ = writeln!(
        out,
        " * @brief Configuration of the initial lengths of the free lists within the"
    );
    let _ = writeln!(out, " *        array arena.");
    let _ = writeln!(out, " *");
    let _ = writeln!(
        out,
        " * @note This file can be generated by the discretize tool (manually run)"
    );
    let _ = writeln!(out, " *       or it can be manually modified as the user wishes.");
    let _ = writeln!(out, " *");
    let _ = writeln!(out, " * @date {stamp}");
    let _ = writeln!(out, " * @copyright MIT License");
    let _ = writeln!(out, " */");
    let _ = writeln!(out);
    let _ = writeln!(out, "#ifndef _ARRAY_CFG_H_");
    let _ = writeln!(out, "#define _ARRAY_CFG_H_");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "// Given the arena size: {} bytes, discretize allocates the bytes",
        plan.arena_size()
    );
    let _ = writeln!(out, "// as shown below:");
    let _ = writeln!(out);
    for (size, count) in plan.iter_desc() {
        let name = format!("BLOCKS_{size}_LIST_INIT_LEN");
        let _ = writeln!(out, "#define {name:<25} {count:>3} // {} bytes", size * count);
    }
    let _ = writeln!(out, "// {:<33}     {} byte gap", "", plan.gap());
    out.push_str("\n\n#endif // _ARRAY_CFG_H_\n\n");
    out
}

/// Writes the rendered header through the caller's sink.
pub fn write_header<W: Write>(sink: &mut W, content: &str) -> io::Result<()> {
    sink.write_all(content.as_bytes())
}
