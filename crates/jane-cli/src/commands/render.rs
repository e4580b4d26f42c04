use jane_compiler::{Config, DefaultRenderer, TypeRenderer};

use super::operand::{OperandError, parse_type};

pub struct RenderArgs {
    pub ty: String,
    pub array_template: Option<String>,
    pub slice_template: Option<String>,
    pub map_template: Option<String>,
    pub tuple_template: Option<String>,
    pub func_template: Option<String>,
}

pub fn run(args: RenderArgs) {
    match render(&args) {
        Ok(spelling) => println!("{}", spelling),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// C++ spelling of the type expression in `args`.
pub fn render(args: &RenderArgs) -> Result<String, OperandError> {
    let ty = parse_type(&args.ty)?;
    let config = config(args);
    tracing::debug!(signature = %ty.signature, "rendering");
    Ok(DefaultRenderer::new(&config).render(&ty))
}

fn config(args: &RenderArgs) -> Config {
    let mut config = Config::new();
    if let Some(name) = &args.array_template {
        config = config.array_template(name.clone());
    }
    if let Some(name) = &args.slice_template {
        config = config.slice_template(name.clone());
    }
    if let Some(name) = &args.map_template {
        config = config.map_template(name.clone());
    }
    if let Some(name) = &args.tuple_template {
        config = config.tuple_template(name.clone());
    }
    if let Some(name) = &args.func_template {
        config = config.func_template(name.clone());
    }
    config
}
