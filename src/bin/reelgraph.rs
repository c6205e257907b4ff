use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use reelgraph::{
    AspectRatio, CompileConfig, FfmpegExecutor, FfmpegExecutorOpts, ImageInput, JobDescriptor,
    JobExecutor as _, Settings, SlideshowCompiler, SlideshowRequest, TransitionKind,
};

#[derive(Parser, Debug)]
#[command(name = "reelgraph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a slideshow and print the encoder job.
    Compile(CompileArgs),
    /// Compile a slideshow and render it (requires `ffmpeg` on PATH).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct JobArgs {
    /// Slideshow request JSON (images, audio, settings, output). Replaces the flags below.
    #[arg(long, conflicts_with_all = ["images", "audio", "transition", "duration", "aspect", "out"])]
    request: Option<PathBuf>,

    /// Image file, in playback order (repeatable).
    #[arg(long = "image", value_name = "PATH")]
    images: Vec<PathBuf>,

    /// Soundtrack muxed alongside the video.
    #[arg(long)]
    audio: Option<PathBuf>,

    /// Transition kind: fade, dissolve, slide_left, slide_right, zoom (unknown -> dissolve).
    #[arg(long, default_value = "dissolve")]
    transition: String,

    /// Transition duration in seconds.
    #[arg(long, default_value_t = 0.8)]
    duration: f64,

    /// Aspect ratio: 9:16, 16:9, 1:1, 4:5 (unknown -> 16:9).
    #[arg(long, default_value = "16:9")]
    aspect: String,

    /// Output video path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Compiler configuration JSON (display duration, encoder parameters, fade offsets).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CompileArgs {
    #[command(flatten)]
    job: JobArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Shell)]
    format: OutputFormat,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    job: JobArgs,

    /// Refuse to overwrite an existing output file.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,

    /// Encoder program to run.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// One shell-quoted command line.
    Shell,
    /// One argument per line.
    Args,
    /// Structured JSON descriptor.
    Json,
    /// Only the `filter_complex` expression.
    Graph,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<CompileConfig> {
    match path {
        Some(p) => CompileConfig::from_path(p)
            .with_context(|| format!("load compile config '{}'", p.display())),
        None => Ok(CompileConfig::default()),
    }
}

fn build_request(args: &JobArgs) -> anyhow::Result<SlideshowRequest> {
    if let Some(path) = &args.request {
        return SlideshowRequest::from_path(path)
            .with_context(|| format!("load slideshow request '{}'", path.display()));
    }
    let out = args
        .out
        .clone()
        .context("--out is required unless --request is given")?;
    Ok(SlideshowRequest {
        images: args.images.iter().cloned().map(ImageInput::new).collect(),
        audio: args.audio.clone(),
        settings: Settings {
            transition_kind: TransitionKind::parse(&args.transition),
            transition_duration: args.duration,
            aspect_ratio: AspectRatio::parse(&args.aspect),
        },
        output: out,
    })
}

fn compile_job(args: &JobArgs) -> anyhow::Result<JobDescriptor> {
    let cfg = read_config(args.config.as_deref())?;
    let req = build_request(args)?;
    let compiler = SlideshowCompiler::new(cfg)?;
    Ok(compiler.compile_request(&req)?)
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let job = compile_job(&args.job)?;
    match args.format {
        OutputFormat::Shell => println!("ffmpeg {}", job.to_command_line()),
        OutputFormat::Args => {
            for a in job.to_args() {
                println!("{a}");
            }
        }
        OutputFormat::Json => {
            let v = serde_json::json!({
                "fingerprint": job.fingerprint().to_string(),
                "args": job.to_args(),
                "job": job,
            });
            println!("{}", serde_json::to_string_pretty(&v)?);
        }
        OutputFormat::Graph => println!("{}", job.graph.to_filter_complex()),
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let job = compile_job(&args.job)?;
    let mut exec = FfmpegExecutor::new(FfmpegExecutorOpts {
        program: args.ffmpeg,
        overwrite: !args.no_overwrite,
    });
    let out = exec
        .execute(&job)
        .with_context(|| format!("render '{}'", job.output_path.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
