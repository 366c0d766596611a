use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP API and the web UI
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,

        /// Comma-separated list of allowed CORS origins (default: any)
        #[arg(long)]
        cors_origins: Option<String>,
    },

    /// Interactive terminal UI with one tab per category
    Shell,

    /// Send one chat message and print the reply
    Chat {
        message: String,
    },

    /// Summarize, translate, or derive Q&A from a document (`-` reads stdin)
    Document {
        #[arg(short = 't', long = "type", default_value = "summary")]
        kind: String,

        content: String,
    },

    /// Generate, explain, or optimize code (`-` reads stdin)
    Code {
        #[arg(short = 't', long = "type", default_value = "generate")]
        kind: String,

        #[arg(short = 'L', long, default_value = "javascript")]
        language: String,

        code: String,
    },

    /// Summary, polish, sentiment, or keyword extraction (`-` reads stdin)
    Text {
        #[arg(short = 't', long = "type", default_value = "summary")]
        kind: String,

        content: String,
    },

    /// Write a poem, story, marketing copy, or brainstorm ideas on a topic
    Creative {
        #[arg(short = 't', long = "type", default_value = "poem")]
        kind: String,

        topic: String,
    },

    /// Email drafting, meeting minutes, study plans, or health tips
    Utility {
        #[arg(short = 't', long = "type", default_value = "email")]
        kind: String,

        input: String,
    },

    /// Generate an image and write it as PNG
    Image {
        prompt: String,

        #[arg(short, long, default_value = "image.png")]
        output: PathBuf,

        /// Image size as WIDTHxHEIGHT
        #[arg(long)]
        size: Option<String>,
    },
}
