use chrono::Local;
use tracing::info;

use ditlaunch::core::params::LaunchParams;
use ditlaunch::io::load_preset;
use ditlaunch::{api, plan_launch};

use super::args::CliArgs;
use super::errors::AppError;

/// Fold explicit CLI flags into `params`. Anything the user did not pass
/// keeps its preset or built-in value.
fn apply_overrides(params: &mut LaunchParams, args: &CliArgs) {
    if let Some(gpus) = args.gpu_count {
        params.gpus = gpus;
    }
    if let Some(epochs) = args.epochs {
        params.epochs = epochs;
    }
    if let Some(batch_size) = args.batch_size {
        params.batch_size = batch_size;
    }
    if let Some(lr) = args.lr {
        params.lr = lr;
    }
    if let Some(accumulation_steps) = args.accumulation_steps {
        params.accumulation_steps = accumulation_steps;
    }
    if let Some(save_interval) = args.save_interval {
        params.save_interval = save_interval;
    }
    if args.no_grad_checkpoint {
        params.grad_checkpoint = false;
    }
    if !args.datasets.is_empty() {
        params.datasets = args.datasets.clone();
    }
    if let Some(video_dir) = &args.video_dir {
        params.video_dir = video_dir.clone();
    }
    if let Some(checkpoint_root) = &args.checkpoint_root {
        params.checkpoint_root = checkpoint_root.clone();
    }
    if let Some(tensorboard_root) = &args.tensorboard_root {
        params.tensorboard_root = tensorboard_root.clone();
    }
    if let Some(model) = args.model {
        params.model = Some(model);
    }
    if let Some(model_arch) = args.model_arch {
        params.model_arch = Some(model_arch);
    }
    if let Some(compressor) = args.compressor {
        params.compressor = Some(compressor);
    }
    if let Some(sp_size) = args.sp_size {
        params.sp_size = Some(sp_size);
    }
    if let Some(sp_mode) = args.sp_mode {
        params.sp_mode = Some(sp_mode);
    }
    if args.sp_overlap {
        params.sp_overlap = true;
    }
    if let Some(load_model) = &args.load_model {
        params.load_model = Some(load_model.clone());
    }
    if let Some(load_optimizer) = &args.load_optimizer {
        params.load_optimizer = Some(load_optimizer.clone());
    }
    if let Some(launcher) = &args.launcher {
        params.launcher = launcher.clone();
    }
    if let Some(script) = &args.script {
        params.script = script.clone();
    }
}

/// Resolve the effective parameters for this invocation: built-in
/// defaults, then the preset file if given, then explicit flags.
fn resolve_params(args: &CliArgs) -> Result<LaunchParams, AppError> {
    if let Some(value) = args.gpu_count {
        if value == 0 {
            return Err(AppError::InvalidGpuCount { value });
        }
    }

    let mut params = match &args.preset {
        Some(path) => load_preset(path)?,
        None => LaunchParams::default(),
    };
    apply_overrides(&mut params, args);
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<i32, Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = resolve_params(&args)?;
    let root = api::resolve_launch_root(args.root.as_deref())?;

    if args.dry_run {
        let plan = plan_launch(&params, Local::now())?;
        println!("launch root: {}", root.display());
        println!("{}", plan.command.render());
        return Ok(0);
    }

    info!("Launch root: {}", root.display());
    let code = api::launch(&params, Some(root.as_path()))?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use ditlaunch::io::save_preset;
    use std::path::PathBuf;

    use super::*;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(argv)
    }

    #[test]
    fn gpu_count_defaults_to_eight() {
        let params = resolve_params(&parse(&["ditlaunch"])).unwrap();
        assert_eq!(params.gpus, 8);
    }

    #[test]
    fn positional_gpu_count_is_honored() {
        let params = resolve_params(&parse(&["ditlaunch", "4"])).unwrap();
        assert_eq!(params.gpus, 4);
    }

    #[test]
    fn zero_gpu_count_is_rejected_up_front() {
        let err = resolve_params(&parse(&["ditlaunch", "0"])).unwrap_err();
        assert!(matches!(err, AppError::InvalidGpuCount { value: 0 }));
    }

    #[test]
    fn flags_override_builtin_defaults() {
        let params = resolve_params(&parse(&[
            "ditlaunch",
            "--epochs",
            "3",
            "--no-grad-checkpoint",
            "--dataset",
            "shards/a",
            "--dataset",
            "shards/b",
        ]))
        .unwrap();
        assert_eq!(params.epochs, 3);
        assert!(!params.grad_checkpoint);
        assert_eq!(
            params.datasets,
            vec![PathBuf::from("shards/a"), PathBuf::from("shards/b")]
        );
        // untouched knobs keep their defaults
        assert_eq!(params.batch_size, 1);
        assert_eq!(params.launcher, "torchrun");
    }

    #[test]
    fn flags_win_over_preset_values() {
        let dir = tempfile::tempdir().unwrap();
        let preset_path = dir.path().join("night-run.json");
        let preset = LaunchParams {
            gpus: 2,
            epochs: 5,
            ..Default::default()
        };
        save_preset(&preset_path, &preset).unwrap();

        let params = resolve_params(&parse(&[
            "ditlaunch",
            "4",
            "--preset",
            preset_path.to_str().unwrap(),
        ]))
        .unwrap();
        // positional flag beats the preset, preset beats the default
        assert_eq!(params.gpus, 4);
        assert_eq!(params.epochs, 5);
    }

    #[test]
    fn missing_preset_file_is_reported() {
        let err = resolve_params(&parse(&["ditlaunch", "--preset", "/no/such/preset.json"]))
            .unwrap_err();
        assert!(matches!(err, AppError::Preset(_)));
    }
}
