//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("jane")
        .about("Jane transpiler middle tier: binary-operation solver and C++ type spelling")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(solve_command())
        .subcommand(render_command())
}

/// Solve a single binary operation.
pub fn solve_command() -> Command {
    Command::new("solve")
        .about("Solve a binary operation and print its result type and constant")
        .after_help(
            r#"OPERANDS:
  i32=5          constant of type i32
  str=foo        constant string
  bool=true      constant bool
  *i32           runtime value of type *i32
  nil            the nil literal

EXAMPLES:
  jane solve i32=5 + i32=2            # folds to 7, narrowed to i8
  jane solve u32=1 '<<' u32=40        # shift result typed by amount
  jane solve str=foo + str=bar --json
  jane solve int + i32 --word-size 32"#,
        )
        .arg(left_arg())
        .arg(op_arg())
        .arg(right_arg())
        .arg(word_size_arg())
        .arg(json_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Print the C++ spelling of a type expression.
pub fn render_command() -> Command {
    Command::new("render")
        .about("Print the C++ spelling of a type expression")
        .after_help(
            r#"EXAMPLES:
  jane render '*[]i32'                          # array<i32_jnt>*
  jane render '[str:u8]'                        # map<str_jnt,u8_jnt>
  jane render '[:]f64' --slice-template span    # span<f64_jnt>"#,
        )
        .arg(type_arg())
        .arg(array_template_arg())
        .arg(slice_template_arg())
        .arg(map_template_arg())
        .arg(tuple_template_arg())
        .arg(func_template_arg())
        .arg(verbose_arg())
}
