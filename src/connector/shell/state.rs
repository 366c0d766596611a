use std::collections::HashMap;
use std::str::FromStr;

use crate::domain::{Category, ChatEntry, GeneratedImage, ResultRecord, Role};

/// Shown in the chat transcript when a chat request fails.
pub const CHAT_APOLOGY: &str = "抱歉，我遇到了一些问题。请检查您的网络连接或稍后再试。";

pub const LANGUAGES: [&str; 6] = ["javascript", "python", "java", "cpp", "go", "rust"];
pub const DEFAULT_LANGUAGE: &str = "javascript";

const HELP: &str = "\
Commands:
  /tab <name>     switch tab (chat, image, document, code, text, creative, utility)
  /type <type>    select the task type for the current tab
  /lang <lang>    select the code language (code tab)
  /history        show the current tab's history
  /help           show this help
  /quit           leave the shell
Anything else is submitted to the current tab.";

/// Notice printed when a non-chat submission fails.
pub fn failure_notice(category: Category) -> &'static str {
    match category {
        Category::Chat => CHAT_APOLOGY,
        Category::Image => "生成图片失败，请检查您的网络连接或稍后再试。",
        Category::Document => "文档处理失败，请检查您的网络连接或稍后再试。",
        Category::Code => "代码处理失败，请检查您的网络连接或稍后再试。",
        Category::Text => "文本处理失败，请检查您的网络连接或稍后再试。",
        Category::Creative => "创意内容生成失败，请检查您的网络连接或稍后再试。",
        Category::Utility => "实用工具处理失败，请检查您的网络连接或稍后再试。",
    }
}

/// One request captured from the current tab and its selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub category: Category,
    pub kind: Option<String>,
    pub language: Option<String>,
    pub input: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Print(String),
    Submit(Submission),
}

/// Tabs, selectors and per-tab history of an interactive session.
#[derive(Debug)]
pub struct ShellState {
    active: Category,
    kinds: HashMap<Category, &'static str>,
    language: String,
    chat: Vec<ChatEntry>,
    images: Vec<GeneratedImage>,
    results: HashMap<Category, Vec<ResultRecord>>,
    busy: bool,
}

impl ShellState {
    pub fn new() -> Self {
        let kinds = Category::ALL
            .iter()
            .filter_map(|c| c.task_names().first().map(|first| (*c, *first)))
            .collect();

        Self {
            active: Category::Chat,
            kinds,
            language: DEFAULT_LANGUAGE.to_string(),
            chat: Vec::new(),
            images: Vec::new(),
            results: HashMap::new(),
            busy: false,
        }
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn kind(&self, category: Category) -> Option<&'static str> {
        self.kinds.get(&category).copied()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn chat(&self) -> &[ChatEntry] {
        &self.chat
    }

    pub fn images(&self) -> &[GeneratedImage] {
        &self.images
    }

    /// Newest first.
    pub fn results(&self, category: Category) -> &[ResultRecord] {
        self.results.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Prompt prefix reflecting the active tab and its selectors.
    pub fn prompt(&self) -> String {
        match (self.active, self.kind(self.active)) {
            (Category::Code, Some(kind)) => format!("[code:{}:{}]> ", kind, self.language),
            (category, Some(kind)) => format!("[{}:{}]> ", category, kind),
            (category, None) => format!("[{}]> ", category),
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Action {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Action::None;
        }
        if let Some(command) = trimmed.strip_prefix('/') {
            return self.command(command);
        }
        if self.busy {
            return Action::None;
        }
        self.submit(line)
    }

    fn command(&mut self, command: &str) -> Action {
        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        match (name, arg) {
            ("quit" | "exit", _) => Action::Quit,
            ("help", _) => Action::Print(HELP.to_string()),
            ("history", _) => Action::Print(self.render_history()),
            ("tab", Some(tab)) => match Category::from_str(tab) {
                Ok(category) => {
                    self.active = category;
                    Action::Print(format!("Switched to {}", category.label()))
                }
                Err(e) => Action::Print(e.to_string()),
            },
            ("type", Some(kind)) => {
                match self.active.task_names().iter().copied().find(|name| *name == kind) {
                    Some(name) => {
                        self.kinds.insert(self.active, name);
                        Action::Print(format!("Type set to {}", name))
                    }
                    None if self.active.task_names().is_empty() => {
                        Action::Print(format!("The {} tab has no type selector", self.active))
                    }
                    None => Action::Print(format!(
                        "{} (expected one of: {})",
                        self.active.invalid_type_message(),
                        self.active.task_names().join(", ")
                    )),
                }
            }
            ("lang", Some(language)) => {
                if LANGUAGES.contains(&language) {
                    self.language = language.to_string();
                    Action::Print(format!("Language set to {}", language))
                } else {
                    Action::Print(format!(
                        "Unknown language {} (expected one of: {})",
                        language,
                        LANGUAGES.join(", ")
                    ))
                }
            }
            _ => Action::Print(format!("Unknown command /{}; try /help", command)),
        }
    }

    fn submit(&mut self, input: &str) -> Action {
        self.busy = true;
        if self.active == Category::Chat {
            self.chat.push(ChatEntry::new(Role::User, input));
        }

        Action::Submit(Submission {
            category: self.active,
            kind: self.kind(self.active).map(str::to_string),
            language: (self.active == Category::Code).then(|| self.language.clone()),
            input: input.to_string(),
        })
    }

    /// Record the outcome of `submission` and return the text to display.
    ///
    /// Chat replies are appended; every other history is newest first.
    pub fn finish(&mut self, submission: &Submission, outcome: Result<String, String>) -> String {
        self.busy = false;
        let category = submission.category;

        let output = match outcome {
            Ok(output) => output,
            Err(_) if category == Category::Chat => {
                self.chat.push(ChatEntry::new(Role::Assistant, CHAT_APOLOGY));
                return CHAT_APOLOGY.to_string();
            }
            Err(_) => return failure_notice(category).to_string(),
        };

        match category {
            Category::Chat => {
                self.chat.push(ChatEntry::new(Role::Assistant, output.as_str()));
                output
            }
            Category::Image => {
                let image = GeneratedImage::new(submission.input.as_str(), output);
                let line = format!("Generated image {}", image.id());
                self.images.insert(0, image);
                line
            }
            _ => {
                let mut record = ResultRecord::new(
                    submission.kind.clone().unwrap_or_default(),
                    submission.input.as_str(),
                    output.as_str(),
                );
                if let Some(language) = &submission.language {
                    record = record.with_language(language.as_str());
                }
                self.results.entry(category).or_default().insert(0, record);
                output
            }
        }
    }

    fn render_history(&self) -> String {
        let lines: Vec<String> = match self.active {
            Category::Chat => self
                .chat
                .iter()
                .map(|entry| format!("{}: {}", entry.role(), entry.content()))
                .collect(),
            Category::Image => self
                .images
                .iter()
                .map(|image| format!("#{} {}", image.id(), image.prompt()))
                .collect(),
            category => self
                .results(category)
                .iter()
                .map(|record| match record.language() {
                    Some(language) => format!(
                        "#{} [{}/{}] {}\n{}",
                        record.id(),
                        record.kind(),
                        language,
                        record.input(),
                        record.output()
                    ),
                    None => format!(
                        "#{} [{}] {}\n{}",
                        record.id(),
                        record.kind(),
                        record.input(),
                        record.output()
                    ),
                })
                .collect(),
        };

        if lines.is_empty() {
            "No history yet.".to_string()
        } else {
            lines.join("\n\n")
        }
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}
