use super::operand::OperandError;
use super::render::{RenderArgs, render};

fn args(ty: &str) -> RenderArgs {
    RenderArgs {
        ty: ty.to_owned(),
        array_template: None,
        slice_template: None,
        map_template: None,
        tuple_template: None,
        func_template: None,
    }
}

fn spell(ty: &str) -> String {
    render(&args(ty)).expect("valid type")
}

#[test]
fn default_templates() {
    insta::assert_snapshot!(spell("*[]i32"), @"array<i32_jnt>*");
    insta::assert_snapshot!(spell("[str:u8]"), @"map<str_jnt,u8_jnt>");
    insta::assert_snapshot!(spell("(i32, bool)"), @"std::tuple<i32_jnt,bool>");
    insta::assert_snapshot!(spell("fn"), @"func<void(void)>");
    insta::assert_snapshot!(spell("*Point"), @"JNID(Point)*");
}

#[test]
fn custom_templates() {
    let mut custom = args("[:][]f64");
    custom.slice_template = Some("span".to_owned());
    custom.array_template = Some("vec".to_owned());
    insta::assert_snapshot!(render(&custom).expect("valid type"), @"span<vec<f64_jnt>>");

    let mut custom = args("[i32:(u8, str)]");
    custom.map_template = Some("dict".to_owned());
    custom.tuple_template = Some("pair".to_owned());
    insta::assert_snapshot!(render(&custom).expect("valid type"), @"dict<i32_jnt,pair<u8_jnt,str_jnt>>");
}

#[test]
fn invalid_type() {
    assert_eq!(
        render(&args("[i32")),
        Err(OperandError::InvalidType("[i32".to_owned()))
    );
}
