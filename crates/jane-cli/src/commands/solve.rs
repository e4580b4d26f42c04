use std::fmt::Write;

use jane_compiler::solver::UnknownOperator;
use jane_compiler::{
    BinaryOp, Config, Constant, DefaultRenderer, Evaluation, Operator, Solver, SourceMap, Span,
    TypeRenderer, Value,
};
use jane_core::WordSize;
use rowan::{TextRange, TextSize};
use serde::Serialize;

use super::operand::{OperandError, parse_operand};

pub struct SolveArgs {
    pub left: String,
    pub op: String,
    pub right: String,
    pub word_size: WordSize,
    pub json: bool,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("left operand: {0}")]
    Left(OperandError),
    #[error("right operand: {0}")]
    Right(OperandError),
    #[error(transparent)]
    Operator(#[from] UnknownOperator),
}

/// A solved expression together with the source its diagnostics point into.
pub struct Solved {
    pub value: Value,
    pub cxx: String,
    pub eval: Evaluation,
    pub sources: SourceMap,
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(rename = "type")]
    ty: &'a str,
    cxx: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    constant: Option<&'a Constant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    diagnostics: Vec<DiagnosticReport<'a>>,
    failed: bool,
}

#[derive(Serialize)]
struct DiagnosticReport<'a> {
    kind: &'static str,
    severity: String,
    message: &'a str,
    start: u32,
    end: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    hints: Vec<String>,
}

pub fn run(args: SolveArgs) {
    let solved = match solve(&args) {
        Ok(solved) => solved,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        match to_json(&solved) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: JSON serialization failed: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", to_text(&solved));
        let diagnostics = solved.eval.diagnostics();
        if !diagnostics.is_empty() {
            eprint!(
                "{}",
                diagnostics.render_colored(&solved.sources, args.color)
            );
        }
    }

    if solved.eval.has_error() {
        std::process::exit(1);
    }
}

/// Solve `left op right` as given on the command line.
///
/// The three arguments are joined into a one-line source so that diagnostics
/// point at the operator.
pub fn solve(args: &SolveArgs) -> Result<Solved, SolveError> {
    let op: BinaryOp = args.op.trim().parse()?;

    let expr = format!("{} {} {}", args.left, args.op, args.right);
    let (sources, id) = SourceMap::one_liner(&expr);
    let left_len = TextSize::of(args.left.as_str());
    let op_start = left_len + TextSize::from(1);
    let op_len = TextSize::of(args.op.as_str());
    let right_start = op_start + op_len + TextSize::from(1);

    let left = parse_operand(&args.left)
        .map_err(SolveError::Left)?
        .with_span(Span::new(id, TextRange::at(0.into(), left_len)));
    let right = parse_operand(&args.right)
        .map_err(SolveError::Right)?
        .with_span(Span::new(
            id,
            TextRange::at(right_start, TextSize::of(args.right.as_str())),
        ));
    let op = Operator::at(op, Span::new(id, TextRange::at(op_start, op_len)));

    let config = Config::new().word_size(args.word_size);
    let mut eval = Evaluation::new();
    let value = Solver::new(&config).solve(&mut eval, &left, op, &right);
    let cxx = DefaultRenderer::new(&config)
        .with_sources(&sources)
        .render(&value.ty);

    Ok(Solved {
        value,
        cxx,
        eval,
        sources,
    })
}

pub fn to_text(solved: &Solved) -> String {
    let value = &solved.value;
    let mut out = String::new();
    writeln!(out, "type: {}", value.ty.signature).expect("String write never fails");
    writeln!(out, "cxx: {}", solved.cxx).expect("String write never fails");
    if let Some(constant) = &value.constant {
        writeln!(out, "const: {}", constant).expect("String write never fails");
    }
    if let Some(model) = &value.model {
        writeln!(out, "model: {}", model).expect("String write never fails");
    }
    out
}

pub fn to_json(solved: &Solved) -> serde_json::Result<String> {
    let value = &solved.value;
    let diagnostics = solved
        .eval
        .diagnostics()
        .iter()
        .map(|d| DiagnosticReport {
            kind: d.kind().key(),
            severity: d.severity().to_string(),
            message: d.message(),
            start: d.span().range.start().into(),
            end: d.span().range.end().into(),
            hints: d.hints().to_vec(),
        })
        .collect();
    let report = Report {
        ty: &value.ty.signature,
        cxx: &solved.cxx,
        constant: value.constant.as_ref(),
        model: value.model.as_ref().map(|m| m.as_str()),
        diagnostics,
        failed: solved.eval.has_error(),
    };
    serde_json::to_string_pretty(&report)
}
