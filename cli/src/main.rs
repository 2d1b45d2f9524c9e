use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use dumpgen_compiler::emitter::emit_field;
use dumpgen_compiler::error::DumpError;
use dumpgen_compiler::tokenizer::tokenize_source;
use dumpgen_compiler::walker::FieldWalker;
use dumpgen_compiler::{collect_fields, generate_statements, EmitContext};

#[derive(Parser)]
#[command(name = "dumpgen")]
#[command(about = "Generate printf-style dump statements from C struct declarations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one print statement per recognized struct field
    Generate {
        /// Input header fragment containing the struct declaration
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (if omitted, statements stream to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print function to emit calls to
        #[arg(long, default_value = "ImGui::BulletText")]
        func: String,

        /// Expression prefix used to access each field
        #[arg(long, default_value = "p.limits")]
        object: String,

        /// Helper the generated code calls to render flag-set fields
        #[arg(long, default_value = "get_vk_sample_count_flag_names")]
        flag_helper: String,
    },

    /// Print the recognized fields as JSON (printed to stdout)
    Fields {
        /// Input header fragment
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the token stream, one token per line
    Tokens {
        /// Input header fragment
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<(), DumpError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate {
            input,
            output,
            func,
            object,
            flag_helper,
        } => {
            let text = fs::read_to_string(input).map_err(DumpError::Io)?;
            let ctx = EmitContext {
                function_name:     func.clone(),
                object_expression: object.clone(),
                flag_resolver:     flag_helper.clone(),
            };

            if let Some(out_path) = output {
                let statements = generate_statements(&text, &ctx)?;
                let mut contents = statements.join("\n");
                contents.push('\n');
                fs::write(out_path, contents).map_err(DumpError::Io)?;
                println!("Generated {} statements → {}", statements.len(), out_path.display());
            } else {
                // Stream to stdout so statements produced before a mid-walk
                // failure are still printed.
                let tokens = tokenize_source(&text)?;
                for field in FieldWalker::new(&tokens) {
                    if let Some(statement) = emit_field(&field?, &ctx) {
                        println!("{}", statement);
                    }
                }
            }
            Ok(())
        }

        Commands::Fields { input } => {
            let text = fs::read_to_string(input).map_err(DumpError::Io)?;
            let fields = collect_fields(&text)?;
            println!("{}", serde_json::to_string_pretty(&fields).unwrap());
            Ok(())
        }

        Commands::Tokens { input } => {
            let text = fs::read_to_string(input).map_err(DumpError::Io)?;
            for token in tokenize_source(&text)? {
                println!("{:?}", token);
            }
            Ok(())
        }
    }
}
