//! FFmpeg command builder and runner.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{MediaError, MediaResult};

/// One input to an FFmpeg invocation: a file path or an `lavfi`
/// synthetic source, plus its pre-`-i` arguments.
#[derive(Debug, Clone)]
pub struct FfmpegInput {
    source: String,
    args: Vec<String>,
}

impl FfmpegInput {
    /// A file input.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            source: path.as_ref().to_string_lossy().to_string(),
            args: Vec::new(),
        }
    }

    /// A synthetic `lavfi` source, e.g. `color=c=black:s=1080x1920:d=1`.
    pub fn lavfi(spec: impl Into<String>) -> Self {
        Self {
            source: spec.into(),
            args: vec!["-f".to_string(), "lavfi".to_string()],
        }
    }

    /// Loop a still input (required to hold an image as video frames).
    pub fn looped(self) -> Self {
        self.arg("-loop").arg("1")
    }

    /// Limit this input to a duration in seconds.
    pub fn duration(self, seconds: f64) -> Self {
        self.arg("-t").arg(format!("{:.3}", seconds))
    }

    /// Add a raw pre-`-i` argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// Builder for multi-input FFmpeg commands.
#[derive(Debug, Clone)]
pub struct FfmpegCommand {
    /// Ordered inputs; order defines the `[N:v]` stream indices.
    inputs: Vec<FfmpegInput>,
    /// Output file path
    output: PathBuf,
    /// Output arguments (after the inputs)
    output_args: Vec<String>,
    /// Whether to overwrite output
    overwrite: bool,
    /// Log level
    log_level: String,
}

impl FfmpegCommand {
    /// Create a new FFmpeg command for the given output path.
    pub fn new(output: impl AsRef<Path>) -> Self {
        Self {
            inputs: Vec::new(),
            output: output.as_ref().to_path_buf(),
            output_args: Vec::new(),
            overwrite: true,
            log_level: "error".to_string(),
        }
    }

    /// Append an input. Input order is significant.
    pub fn input(mut self, input: FfmpegInput) -> Self {
        self.inputs.push(input);
        self
    }

    /// Append multiple inputs in order.
    pub fn inputs<I>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = FfmpegInput>,
    {
        self.inputs.extend(inputs);
        self
    }

    /// Add an output argument.
    pub fn output_arg(mut self, arg: impl Into<String>) -> Self {
        self.output_args.push(arg.into());
        self
    }

    /// Add multiple output arguments.
    pub fn output_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set filter complex.
    pub fn filter_complex(self, filter: impl Into<String>) -> Self {
        self.output_arg("-filter_complex").output_arg(filter)
    }

    /// Map a stream or filter label into the output.
    pub fn map(self, stream: impl Into<String>) -> Self {
        self.output_arg("-map").output_arg(stream)
    }

    /// Stop writing when the shortest mapped stream ends.
    pub fn shortest(self) -> Self {
        self.output_arg("-shortest")
    }

    /// Set log level.
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Number of inputs added so far.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Build the command arguments.
    pub fn build_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if self.overwrite {
            args.push("-y".to_string());
        }

        args.push("-v".to_string());
        args.push(self.log_level.clone());

        for input in &self.inputs {
            args.extend(input.args.clone());
            args.push("-i".to_string());
            args.push(input.source.clone());
        }

        args.extend(self.output_args.clone());
        args.push(self.output.to_string_lossy().to_string());

        args
    }
}

/// Runner for FFmpeg commands.
#[derive(Debug, Default)]
pub struct FfmpegRunner {
    /// Timeout in seconds
    timeout_secs: Option<u64>,
}

impl FfmpegRunner {
    /// Create a new runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Run an FFmpeg command to completion.
    pub async fn run(&self, cmd: &FfmpegCommand) -> MediaResult<()> {
        check_ffmpeg()?;

        let args = cmd.build_args();
        debug!("Running FFmpeg: ffmpeg {}", args.join(" "));

        let mut child = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            // Reap the encoder if the run future is dropped on timeout
            .kill_on_drop(true)
            .spawn()?;

        let output_future = async {
            let mut stderr_buf = Vec::new();
            if let Some(mut stderr) = child.stderr.take() {
                use tokio::io::AsyncReadExt;
                let _ = stderr.read_to_end(&mut stderr_buf).await;
            }
            let status = child.wait().await?;
            Ok::<_, std::io::Error>((status, stderr_buf))
        };

        let (status, stderr_buf) = if let Some(timeout_secs) = self.timeout_secs {
            match tokio::time::timeout(
                std::time::Duration::from_secs(timeout_secs),
                output_future,
            )
            .await
            {
                Ok(result) => result?,
                Err(_) => {
                    warn!(timeout_secs, "FFmpeg timed out, killing process");
                    return Err(MediaError::Timeout(timeout_secs));
                }
            }
        } else {
            output_future.await?
        };

        if status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&stderr_buf).trim().to_string();
            Err(MediaError::ffmpeg_failed(
                "FFmpeg exited with non-zero status",
                (!stderr.is_empty()).then_some(stderr),
                status.code(),
            ))
        }
    }
}

/// Check if FFmpeg is available.
pub fn check_ffmpeg() -> MediaResult<PathBuf> {
    which::which("ffmpeg").map_err(|_| MediaError::FfmpegNotFound)
}
