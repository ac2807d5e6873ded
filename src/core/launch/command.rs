//! Launch command assembly.
//!
//! Builds the distributed-launch invocation handed to the OS: the launcher
//! program (`torchrun` by default) followed by the trainer's arguments in a
//! fixed order. The rendered argument vector is the externally observable
//! contract of this crate, so assembly is pure and fully testable.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::core::launch::run_id::RunPaths;
use crate::core::params::LaunchParams;

/// An assembled launch invocation: program plus ordered arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

/// Assemble the full launcher argument vector for one run.
///
/// Argument order is stable: launcher flags, script, dataset shards,
/// video directory, hyperparameters, optional trainer pass-throughs,
/// then the run-scoped output directories.
pub fn assemble(params: &LaunchParams, paths: &RunPaths) -> LaunchCommand {
    let mut args: Vec<String> = vec![
        "--standalone".to_string(),
        "--nproc_per_node".to_string(),
        params.gpus.to_string(),
        path_arg(&params.script),
        "--dataset".to_string(),
    ];
    args.extend(params.datasets.iter().map(|p| path_arg(p)));

    args.push("--video_dir".to_string());
    args.push(path_arg(&params.video_dir));

    args.push("--epochs".to_string());
    args.push(params.epochs.to_string());
    args.push("--batch_size".to_string());
    args.push(params.batch_size.to_string());
    args.push("--lr".to_string());
    args.push(params.lr.to_string());
    args.push("--accumulation_steps".to_string());
    args.push(params.accumulation_steps.to_string());
    args.push("--save_interval".to_string());
    args.push(params.save_interval.to_string());

    if params.grad_checkpoint {
        args.push("--grad_checkpoint".to_string());
    }

    if let Some(model) = params.model {
        args.push("--model".to_string());
        args.push(model.to_string());
    }
    if let Some(arch) = params.model_arch {
        args.push("--model_arch".to_string());
        args.push(arch.to_string());
    }
    if let Some(compressor) = params.compressor {
        args.push("--compressor".to_string());
        args.push(compressor.to_string());
    }
    if let Some(sp_size) = params.sp_size {
        args.push("--sp_size".to_string());
        args.push(sp_size.to_string());
    }
    if let Some(sp_mode) = params.sp_mode {
        args.push("--sp_mode".to_string());
        args.push(sp_mode.to_string());
    }
    if params.sp_overlap {
        args.push("--sp_overlap".to_string());
    }
    if let Some(load_model) = &params.load_model {
        args.push("--load_model".to_string());
        args.push(path_arg(load_model));
    }
    if let Some(load_optimizer) = &params.load_optimizer {
        args.push("--load_optimizer".to_string());
        args.push(path_arg(load_optimizer));
    }

    args.push("--checkpoint_dir".to_string());
    args.push(path_arg(&paths.checkpoint_dir));
    args.push("--tensorboard_dir".to_string());
    args.push(path_arg(&paths.tensorboard_dir));

    let command = LaunchCommand {
        program: params.launcher.clone(),
        args,
    };
    debug!("Assembled launch command: {}", command.render());
    command
}

impl LaunchCommand {
    /// Render the invocation as a single line, for logs and dry runs
    pub fn render(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            if arg.contains(char::is_whitespace) {
                line.push('\'');
                line.push_str(arg);
                line.push('\'');
            } else {
                line.push_str(arg);
            }
        }
        line
    }

    /// Convert into a spawnable `std::process::Command`
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Value following `flag`, if the flag is present with one
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}
