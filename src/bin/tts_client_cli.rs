//! tts-client — command-line front end for the TTS backend
//!
//! Usage:
//!   tts-client languages                                   List supported languages
//!   tts-client models <language>                           List models for a language
//!   tts-client speak --language <l> --model <m> <text>     Synthesize text to a WAV file
//!   tts-client document <file> [--synthesize ...]          Extract chunks, optionally synthesize them

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tts_api_client::{
    ApiClient, ApiClientBuilder, BatchConfig, BatchStrategy, DocumentUpload, SpeechRequest,
};

/// Flags that consume the following argument.
const VALUE_FLAGS: &[&str] = &[
    "--base-url",
    "--language",
    "--model",
    "--sid",
    "--speed",
    "--out",
    "--out-dir",
    "--max-chunk-length",
    "--concurrency",
];

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let rest = &args[2..];
    let result = match args[1].as_str() {
        "languages" => cmd_languages(rest).await,
        "models" => cmd_models(rest).await,
        "speak" => cmd_speak(rest).await,
        "document" => cmd_document(rest).await,
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("Unknown command: {other}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!(
        r#"tts-client — text-to-speech backend client

USAGE:
    tts-client <COMMAND> [OPTIONS]

COMMANDS:
    languages                               List supported languages
    models <language>                       List models for a language
    speak <text> --language <l> --model <m> [--sid <id>] [--speed <x>] [--out <file>]
                                            Synthesize text (default output: speech.wav)
    document <file> [--max-chunk-length <n>]
                                            Extract text chunks from a PDF/DOCX/PPTX/TXT file
        --synthesize --language <l> --model <m> [--sid <id>] [--speed <x>]
                     [--out-dir <dir>] [--concurrency <n>]
                                            Also synthesize every chunk to chunk_NNN.wav
    version                                 Show version information
    help                                    Show this help message

GLOBAL OPTIONS:
    --base-url <url>                        Backend base URL

ENVIRONMENT:
    TTS_API_BASE_URL                        Backend base URL (default http://localhost:8000/api)
    TTS_HTTP_TIMEOUT_SECS                   Request timeout in seconds (default 120)
    TTS_PROXY_URL                           Proxy for all requests
    RUST_LOG                                Log filter (default info)"#
    );
}

fn cmd_version() {
    println!("tts-client {}", env!("CARGO_PKG_VERSION"));
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

fn positionals(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
        } else if !arg.starts_with("--") {
            out.push(arg.as_str());
        }
    }
    out
}

fn parse_flag<T: std::str::FromStr>(args: &[String], name: &str) -> Result<Option<T>, String> {
    match flag_value(args, name) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("invalid value for {name}: {raw}")),
        None => Ok(None),
    }
}

fn build_client(args: &[String]) -> Result<ApiClient, String> {
    let mut builder = ApiClientBuilder::new();
    if let Some(url) = flag_value(args, "--base-url") {
        builder = builder.base_url(url);
    }
    builder.build().map_err(|e| e.to_string())
}

fn speech_template(args: &[String], text: &str) -> Result<SpeechRequest, String> {
    let language = flag_value(args, "--language").ok_or("--language is required")?;
    let model = flag_value(args, "--model").ok_or("--model is required")?;
    let mut request = SpeechRequest::new(language, model, text);
    if let Some(sid) = flag_value(args, "--sid") {
        request = request.with_speaker(sid);
    }
    if let Some(speed) = parse_flag::<f32>(args, "--speed")? {
        request = request.with_speed(speed);
    }
    Ok(request)
}

async fn cmd_languages(args: &[String]) -> Result<(), String> {
    let client = build_client(args)?;
    let languages = client.list_languages().await.map_err(|e| e.to_string())?;
    for language in languages {
        println!("{language}");
    }
    Ok(())
}

async fn cmd_models(args: &[String]) -> Result<(), String> {
    let language = *positionals(args)
        .first()
        .ok_or("usage: tts-client models <language>")?;
    let client = build_client(args)?;
    let models = client
        .list_models(language)
        .await
        .map_err(|e| e.to_string())?;
    for model in models {
        println!("{model}");
    }
    Ok(())
}

async fn cmd_speak(args: &[String]) -> Result<(), String> {
    let text = positionals(args).join(" ");
    if text.trim().is_empty() {
        return Err("usage: tts-client speak <text> --language <l> --model <m>".to_string());
    }
    let request = speech_template(args, &text)?;
    let out = PathBuf::from(flag_value(args, "--out").unwrap_or("speech.wav"));

    let client = build_client(args)?;
    let output = client.synthesize(&request).await.map_err(|e| e.to_string())?;
    write_file(&out, &output.audio.data).await?;
    println!("Wrote {} bytes to {}", output.audio.len(), out.display());
    if let Some(info) = output.info {
        println!(
            "duration={:?} processing_time={:?} rtf={:?}",
            info.duration, info.processing_time, info.rtf
        );
    }
    Ok(())
}

async fn cmd_document(args: &[String]) -> Result<(), String> {
    let path = *positionals(args)
        .first()
        .ok_or("usage: tts-client document <file>")?;
    let upload = DocumentUpload::from_path(path)
        .await
        .map_err(|e| format!("cannot read {path}: {e}"))?;

    let client = build_client(args)?;
    let result = match parse_flag::<usize>(args, "--max-chunk-length")? {
        Some(n) => client.process_document_with(upload, n).await,
        None => client.process_document(upload).await,
    }
    .map_err(|e| e.to_string())?;

    println!(
        "{} ({}): {} chunk(s)",
        result.filename,
        result.file_type,
        result.chunks.len()
    );
    println!("{}", result.text_preview);

    if !has_flag(args, "--synthesize") {
        return Ok(());
    }

    let template = speech_template(args, "")?;
    let strategy = match parse_flag::<usize>(args, "--concurrency")? {
        Some(1) => BatchStrategy::Sequential,
        Some(n) => BatchStrategy::Concurrent { max_concurrency: n },
        None => BatchStrategy::default(),
    };
    let config = BatchConfig::new().with_strategy(strategy);
    let out_dir = PathBuf::from(flag_value(args, "--out-dir").unwrap_or("."));
    tokio::fs::create_dir_all(&out_dir)
        .await
        .map_err(|e| format!("cannot create {}: {e}", out_dir.display()))?;

    let batch = client
        .synthesize_chunks(&template, &result.chunks, &config)
        .await;
    for (i, audio) in &batch.successes {
        let file = out_dir.join(format!("chunk_{:03}.{}", i + 1, audio.format.extension()));
        write_file(&file, &audio.data).await?;
        println!("Wrote {}", file.display());
    }
    for (i, err) in &batch.failures {
        eprintln!("Chunk {} failed: {}", i + 1, err);
    }
    if batch.all_succeeded() {
        Ok(())
    } else {
        Err(format!(
            "{} of {} chunk(s) failed",
            batch.failure_count(),
            result.chunks.len()
        ))
    }
}

async fn write_file(path: &Path, data: &[u8]) -> Result<(), String> {
    tokio::fs::write(path, data)
        .await
        .map_err(|e| format!("cannot write {}: {e}", path.display()))
}
