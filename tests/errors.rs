use cat_gl_wasm::error::{DemoError, InputError, ShaderError};
use cat_gl_wasm::program::ShaderStage;

#[test]
fn missing_elements_are_not_reported_to_the_user() {
    assert!(!DemoError::MissingElement("glcanvas").is_user_facing());
    assert!(DemoError::ContextUnavailable.is_user_facing());
    assert!(DemoError::Js("TypeError".into()).is_user_facing());
}

#[test]
fn messages_name_what_went_wrong() {
    assert_eq!(
        DemoError::MissingElement("vs-editor").to_string(),
        "element #vs-editor not found"
    );
    assert_eq!(
        InputError::BadHexColor("red".into()).to_string(),
        "expected #RRGGBB, got \"red\""
    );
    assert_eq!(
        ShaderError::CreateShader(ShaderStage::Vertex).to_string(),
        "failed to create vertex shader"
    );
}

#[test]
fn errors_box_into_std_error() {
    let errors: Vec<Box<dyn std::error::Error>> = vec![
        Box::new(InputError::NotANumber("1,5".into())),
        Box::new(ShaderError::Link {
            log: "missing main".into(),
        }),
        Box::new(DemoError::ContextUnavailable),
    ];
    let messages: Vec<String> = errors.iter().map(|err| err.to_string()).collect();
    assert_eq!(
        messages,
        [
            "not a number: \"1,5\"",
            "shader program link failed:\nmissing main",
            "WebGL is not available in this browser",
        ]
    );
    assert!(errors.iter().all(|err| err.source().is_none()));
}
