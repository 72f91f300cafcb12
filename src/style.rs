use console::style;

pub enum Style {
    Link, // URLs and addresses
    Failure,
    Success,
    ErrorPrefix, // "error:" text
}

impl Style {
    pub fn paint<S: AsRef<str>>(&self, message: S) -> String {
        let message_ref = message.as_ref();

        if is_no_color_set() {
            return message_ref.to_string();
        }

        match &self {
            Style::Link => style(message_ref).cyan().underlined(),
            Style::Failure => style(message_ref).red(),
            Style::Success => style(message_ref).green(),
            Style::ErrorPrefix => style(message_ref).red().bold(),
        }
        .to_string()
    }
}

pub fn is_no_color_set() -> bool {
    is_bool_env_var_set("NO_COLOR") || is_bool_env_var_set("FOUNDRY_NO_COLOR")
}

fn is_bool_env_var_set(key: &str) -> bool {
    !matches!(
        std::env::var(key).as_deref(),
        Err(..) | Ok("") | Ok("0") | Ok("false") | Ok("False") | Ok("FALSE")
    )
}
