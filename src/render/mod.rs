//! `config.pbtxt` rendering.
//!
//! The template is kept as data. Only the model name and the precision label are
//! substituted; every tensor name and shape is literal text.

use crate::domain::EmitterConfig;

const MODEL_NAME_KEY: &str = "{model_name}";
const FP_TYPE_KEY: &str = "{fp_type}";

/// Model configuration template for the WaveGlow TensorRT plan.
pub const CONFIG_TEMPLATE: &str = r#"
name: "{model_name}"
platform: "tensorrt_plan"
input {
  name: "0"
  data_type: {fp_type}
  dims: [1, 80, 620, 1]
}
input {
  name: "1"
  data_type: {fp_type}
  dims: [1, 8, 19840, 1]
}
output {
  name: "1991"
  data_type: {fp_type}
  dims: [1, 158720]
}
"#;

/// Fill [`CONFIG_TEMPLATE`] for `config`.
///
/// Substitution is single-pass: placeholder-like text inside the model name is
/// copied through untouched.
pub fn render_config(config: &EmitterConfig) -> String {
    let fp_type = config.precision().label();

    let mut out = String::with_capacity(CONFIG_TEMPLATE.len() + config.model_name.len());
    let mut rest = CONFIG_TEMPLATE;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix(MODEL_NAME_KEY) {
            out.push_str(&config.model_name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(FP_TYPE_KEY) {
            out.push_str(fp_type);
            rest = after;
        } else {
            // Block brace, e.g. `input {`.
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
