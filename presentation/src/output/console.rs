//! Console output formatter for the address form and sign results

use cadastro_domain::{AddressForm, Alert, AlertLevel, FieldMarker, SignRecord};
use colored::Colorize;
use serde_json::json;

/// Formats forms, alerts and signs for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the whole form, alert first
    pub fn format_form(form: &AddressForm) -> String {
        let mut output = String::new();

        if let Some(alert) = &form.alert {
            output.push_str(&Self::format_alert(alert));
            output.push_str("\n\n");
        }

        output.push_str(&Self::section_header("Endereço"));

        let cep = match form.cep_marker {
            FieldMarker::Valid => format!("{} {}", form.cep, "v".green()),
            FieldMarker::Invalid => format!("{} {}", form.cep, "x".red()),
            FieldMarker::Unmarked => form.cep.clone(),
        };
        output.push_str(&Self::field("CEP", &cep));
        if let Some(error) = &form.cep_error {
            output.push_str(&format!("  {:<13}{}\n", "", error.red()));
        }

        output.push_str(&Self::field("Rua", &form.street));
        output.push_str(&Self::field("Número", &form.number));
        output.push_str(&Self::field("Complemento", &form.complement));
        output.push_str(&Self::field("Bairro", &form.neighborhood));
        output.push_str(&Self::field("Cidade", &form.city));
        output.push_str(&Self::field("Estado", &form.state_code));

        output.push_str(&format!("\n{} {}\n", "Estado:".dimmed(), form.state.as_str().dimmed()));

        output
    }

    /// Format an alert with its level color
    pub fn format_alert(alert: &Alert) -> String {
        let message = match alert.level {
            AlertLevel::Success => alert.message.green(),
            AlertLevel::Danger => alert.message.red(),
            AlertLevel::Warning => alert.message.yellow(),
            AlertLevel::Info => alert.message.cyan(),
        };
        format!("{} {}", Self::level_marker(alert.level), message)
    }

    /// Format a sign result card
    pub fn format_sign(sign: &SignRecord) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("{} {}", sign.symbol, sign.name)));
        output.push('\n');
        output.push_str(&format!("{} {}\n\n", "Período:".cyan().bold(), sign.period()));
        if !sign.description.is_empty() {
            output.push_str(&Self::indent(&sign.description, "  "));
            output.push('\n');
        }
        output.push_str(&Self::footer());

        output
    }

    /// Format the form as JSON
    pub fn format_form_json(form: &AddressForm) -> String {
        serde_json::to_string_pretty(form).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a sign as JSON, with the period spelled out
    pub fn format_sign_json(sign: &SignRecord) -> String {
        let value = json!({
            "name": sign.name,
            "symbol": sign.symbol,
            "period": sign.period(),
            "description": sign.description,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format an error message as JSON
    pub fn format_error_json(message: &str) -> String {
        serde_json::to_string_pretty(&json!({ "error": message }))
            .unwrap_or_else(|_| "{}".to_string())
    }

    fn level_marker(level: AlertLevel) -> String {
        match level {
            AlertLevel::Success => "[ok]".green().bold().to_string(),
            AlertLevel::Danger => "[erro]".red().bold().to_string(),
            AlertLevel::Warning => "[aviso]".yellow().bold().to_string(),
            AlertLevel::Info => "[info]".cyan().bold().to_string(),
        }
    }

    fn field(label: &str, value: &str) -> String {
        let value = if value.is_empty() {
            "-".dimmed().to_string()
        } else {
            value.to_string()
        };
        format!("  {:<13}{}\n", format!("{}:", label).bold(), value)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{:^40}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(40).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
