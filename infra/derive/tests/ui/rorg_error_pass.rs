use rorg_derive::rorg_error;
use std::borrow::Cow;

#[rorg_error]
pub enum DemoError {
    #[error("Format error{}: {message}", format_context(.context))]
    Format { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u8, DemoError> {
    raw.parse::<u8>().context("parsing a demo value")
}

fn main() {
    let err = parse("x").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (parsing a demo value)"));

    let err: DemoError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");

    let err = Err::<(), _>(DemoError::Format { message: "bad".into(), context: None })
        .context("late")
        .unwrap_err();
    assert_eq!(err.to_string(), "Format error (late): bad");
}
