//! REPL (Read-Eval-Print Loop) over the address form

use crate::{ConsoleFormatter, ProgressReporter};
use cadastro_application::{
    AddressLookup, LookupFlowController, LookupProgressNotifier, NoLookupProgress,
};
use cadastro_domain::Alert;
use cadastro_domain::form::alert::MSG_WELCOME;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::sync::Arc;
use tracing::warn;

const HISTORY_SIZE: usize = 500;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// Search, optionally typing a new CEP first
    Search(Option<String>),
    Number(String),
    Complement(String),
    Clear,
    Submit,
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl FormCommand {
    /// Parse a line; plain text is a CEP to search
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if !line.starts_with('/') {
            return Some(Self::Search(Some(line.to_string())));
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        let command = match cmd {
            "/buscar" | "/b" => {
                if rest.is_empty() {
                    Self::Search(None)
                } else {
                    Self::Search(Some(rest.to_string()))
                }
            }
            "/numero" | "/n" => Self::Number(rest.to_string()),
            "/complemento" | "/c" => Self::Complement(rest.to_string()),
            "/limpar" => Self::Clear,
            "/salvar" => Self::Submit,
            "/mostrar" | "/m" => Self::Show,
            "/ajuda" | "/help" | "/h" | "/?" => Self::Help,
            "/sair" | "/quit" | "/q" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        };
        Some(command)
    }
}

/// What the loop does after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Print(String),
    Quit,
}

/// Interactive address form
pub struct FormRepl<L: AddressLookup + 'static> {
    controller: LookupFlowController<L>,
    show_progress: bool,
}

impl<L: AddressLookup + 'static> FormRepl<L> {
    /// Create a new FormRepl
    pub fn new(lookup: Arc<L>) -> Self {
        Self {
            controller: LookupFlowController::new(lookup),
            show_progress: true,
        }
    }

    /// Set whether to show a spinner while searching
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn controller(&self) -> &LookupFlowController<L> {
        &self.controller
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = Reedline::create();

        let history_path = dirs::data_dir().map(|p| p.join("cadastro").join("form_history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_SIZE, path.clone()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled: {}", e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("cadastro".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let Some(command) = FormCommand::parse(&line) else {
                        continue;
                    };
                    match self.execute(command).await {
                        Step::Print(output) => println!("{}\n", output),
                        Step::Quit => {
                            println!("Até logo!");
                            break;
                        }
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Até logo!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Apply one command to the form
    pub async fn execute(&self, command: FormCommand) -> Step {
        match command {
            FormCommand::Search(input) => {
                if let Some(input) = input {
                    self.controller.input_cep(&input);
                }
                let result = if self.show_progress {
                    let progress = ProgressReporter::new();
                    self.search(&progress).await
                } else {
                    self.search(&NoLookupProgress).await
                };
                match result {
                    Some(rejected) => Step::Print(rejected),
                    None => Step::Print(ConsoleFormatter::format_form(&self.controller.snapshot())),
                }
            }
            FormCommand::Number(number) => {
                self.controller.set_number(number);
                Step::Print(ConsoleFormatter::format_form(&self.controller.snapshot()))
            }
            FormCommand::Complement(complement) => {
                self.controller.set_complement(complement);
                Step::Print(ConsoleFormatter::format_form(&self.controller.snapshot()))
            }
            FormCommand::Clear => Step::Print(ConsoleFormatter::format_alert(&self.controller.clear())),
            FormCommand::Submit => {
                let alert = match self.controller.submit() {
                    Ok(alert) => alert,
                    Err(e) => Alert::warning(e.to_string()),
                };
                Step::Print(ConsoleFormatter::format_alert(&alert))
            }
            FormCommand::Show => {
                Step::Print(ConsoleFormatter::format_form(&self.controller.snapshot()))
            }
            FormCommand::Help => Step::Print(Self::help_text()),
            FormCommand::Quit => Step::Quit,
            FormCommand::Unknown(cmd) => Step::Print(format!(
                "Comando desconhecido: {}\nDigite /ajuda para ver os comandos",
                cmd
            )),
        }
    }

    /// Returns the rejection message when a search is already running
    async fn search(&self, progress: &dyn LookupProgressNotifier) -> Option<String> {
        match self.controller.search_with_progress(progress).await {
            Ok(_) => None,
            Err(rejected) => Some(ConsoleFormatter::format_alert(&Alert::warning(
                rejected.to_string(),
            ))),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          cadastro - Cadastro de Endereço    │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", ConsoleFormatter::format_alert(&Alert::info(MSG_WELCOME)));
        println!();
        println!("{}", Self::help_text());
        println!();
    }

    fn help_text() -> String {
        [
            "Comandos:",
            "  <cep>                 - Buscar o CEP digitado",
            "  /buscar [cep], /b     - Buscar o CEP",
            "  /numero <n>, /n       - Preencher o número",
            "  /complemento <c>, /c  - Preencher o complemento",
            "  /limpar               - Limpar o formulário",
            "  /salvar               - Salvar o endereço",
            "  /mostrar, /m          - Mostrar o formulário",
            "  /ajuda, /h, /?        - Mostrar esta ajuda",
            "  /sair, /q             - Sair",
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cadastro_domain::{AddressRecord, LookupOutcome, LookupState, PostalIdentifier};

    // === Mock implementations ===

    struct MockLookup;

    #[async_trait]
    impl AddressLookup for MockLookup {
        async fn fetch_address(&self, identifier: &PostalIdentifier) -> LookupOutcome {
            if identifier.as_str() == "01310000" {
                LookupOutcome::Found(AddressRecord {
                    street: Some("Avenida Paulista".to_string()),
                    neighborhood: Some("Bela Vista".to_string()),
                    city: Some("São Paulo".to_string()),
                    state_code: Some("SP".to_string()),
                })
            } else {
                LookupOutcome::NotFound
            }
        }
    }

    fn repl() -> FormRepl<MockLookup> {
        FormRepl::new(Arc::new(MockLookup)).with_progress(false)
    }

    #[test]
    fn test_parse_plain_text_is_search() {
        assert_eq!(
            FormCommand::parse("  01310-000 "),
            Some(FormCommand::Search(Some("01310-000".to_string())))
        );
        assert_eq!(FormCommand::parse("   "), None);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(FormCommand::parse("/buscar"), Some(FormCommand::Search(None)));
        assert_eq!(
            FormCommand::parse("/numero 1578"),
            Some(FormCommand::Number("1578".to_string()))
        );
        assert_eq!(
            FormCommand::parse("/complemento apto 12"),
            Some(FormCommand::Complement("apto 12".to_string()))
        );
        assert_eq!(FormCommand::parse("/limpar"), Some(FormCommand::Clear));
        assert_eq!(FormCommand::parse("/salvar"), Some(FormCommand::Submit));
        assert_eq!(FormCommand::parse("/sair"), Some(FormCommand::Quit));
        assert_eq!(
            FormCommand::parse("/voar"),
            Some(FormCommand::Unknown("/voar".to_string()))
        );
    }

    #[tokio::test]
    async fn test_search_then_submit() {
        let repl = repl();

        let step = repl
            .execute(FormCommand::Search(Some("01310000".to_string())))
            .await;
        match step {
            Step::Print(output) => assert!(output.contains("Avenida Paulista")),
            Step::Quit => panic!("unexpected quit"),
        }
        assert_eq!(repl.controller().state(), LookupState::Success);
        assert_eq!(repl.controller().snapshot().cep, "01310-000");

        repl.execute(FormCommand::Number("1578".to_string())).await;
        match repl.execute(FormCommand::Submit).await {
            Step::Print(output) => assert!(output.contains("Endereço salvo com sucesso!")),
            Step::Quit => panic!("unexpected quit"),
        }
    }

    #[tokio::test]
    async fn test_submit_after_not_found_is_rejected() {
        let repl = repl();
        repl.execute(FormCommand::Search(Some("99999998".to_string())))
            .await;
        assert_eq!(repl.controller().state(), LookupState::Error);

        match repl.execute(FormCommand::Submit).await {
            Step::Print(output) => assert!(output.contains("busque um CEP válido")),
            Step::Quit => panic!("unexpected quit"),
        }
        assert_eq!(repl.controller().state(), LookupState::Error);
    }

    #[tokio::test]
    async fn test_clear_and_quit() {
        let repl = repl();
        repl.execute(FormCommand::Search(Some("01310000".to_string())))
            .await;

        match repl.execute(FormCommand::Clear).await {
            Step::Print(output) => assert!(output.contains("Formulário limpo com sucesso!")),
            Step::Quit => panic!("unexpected quit"),
        }
        assert!(repl.controller().snapshot().street.is_empty());
        assert_eq!(repl.controller().state(), LookupState::Idle);

        assert_eq!(repl.execute(FormCommand::Quit).await, Step::Quit);
    }
}
