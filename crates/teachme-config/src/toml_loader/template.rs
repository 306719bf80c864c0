//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# teachme configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[student]
# name = "John Doe"
# grade = 10
# subject = "Financial Literacy"
# interests = ["Video Games", "Computers", "F1 Racing"]

[model]
# provider = "openai"    # openai, claude
# model = "gpt-3.5-turbo-instruct"
# max_tokens = 256       # 1-8192
# base_url = "https://api.openai.com"
# timeout_secs = 60      # 1-600

[session]
# window_pairs = 2       # student/tutor exchanges remembered, 0-50

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
