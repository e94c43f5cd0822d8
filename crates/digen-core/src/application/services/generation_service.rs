//! Generation Service - main application orchestrator.
//!
//! This service coordinates a whole generation run:
//! 1. Create the output root
//! 2. Per service, sequentially: create `<output>/<name>/` and write `types.ts`
//! 3. Write every `register<Name>.ts` on a bounded worker pool
//! 4. Collect per-service failures into a [`GenerationReport`]
//!
//! A failure in step 2 skips that service's registration file. A failure in
//! step 3 affects only its own service. Nothing written is rolled back.
//!
//! Services sharing a name write into the same directory; the last one wins.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        generators::{generate_register_file, generate_types_file},
        ports::{FileKind, Filesystem, GenerationObserver, NoopObserver},
    },
    domain::{GeneratorConfig, RegisterOptions, ServiceDef, TYPES_FILE_NAME, register_file_name},
    error::{DigenError, DigenResult},
};

/// One registration file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTask<'a> {
    pub service: &'a ServiceDef,
    pub path: PathBuf,
    pub options: &'a RegisterOptions,
}

/// A file a run would write, as reported by [`GenerationService::plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub service: String,
    pub kind: FileKind,
    pub path: PathBuf,
}

/// Work for one service that did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFailure {
    pub service: String,
    pub error: DigenError,
}

/// Outcome of [`GenerationService::generate_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    services: usize,
    written: Vec<PathBuf>,
    failures: Vec<ServiceFailure>,
}

impl GenerationReport {
    /// Number of services in the run.
    pub fn services(&self) -> usize {
        self.services
    }

    /// Files written: shared types in service order, then registration files
    /// in service order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn failures(&self) -> &[ServiceFailure] {
        &self.failures
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// `Err(GenerationIncomplete)` if any service failed.
    pub fn into_result(self) -> DigenResult<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(ApplicationError::GenerationIncomplete {
                failed: self.failures.len(),
                total: self.services,
            }
            .into())
        }
    }
}

/// Main generation service.
pub struct GenerationService {
    filesystem: Box<dyn Filesystem>,
    observer: Box<dyn GenerationObserver>,
    parallelism: Option<NonZeroUsize>,
}

impl GenerationService {
    /// Create a new generation service writing through `filesystem`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use digen_core::application::GenerationService;
    ///
    /// let service = GenerationService::new(
    ///     filesystem, // impl Filesystem
    /// )
    /// .with_parallelism(4);
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            observer: Box::new(NoopObserver),
            parallelism: None,
        }
    }

    /// Report progress to `observer`.
    pub fn with_observer(mut self, observer: Box<dyn GenerationObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Cap the registration phase at `workers` threads. Zero is treated as one.
    ///
    /// Defaults to the machine's available parallelism.
    pub fn with_parallelism(mut self, workers: usize) -> Self {
        self.parallelism = Some(NonZeroUsize::new(workers).unwrap_or(NonZeroUsize::MIN));
        self
    }

    /// List the files a run of `config` would write, without touching disk.
    pub fn plan(&self, config: &GeneratorConfig) -> DigenResult<Vec<PlannedFile>> {
        let mut files = Vec::with_capacity(config.services().len() * 2);
        for service in config.services() {
            let dir = service_dir(config.output_dir(), service);
            files.push(PlannedFile {
                service: service.name().to_string(),
                kind: FileKind::SharedTypes,
                path: dir.join(TYPES_FILE_NAME),
            });
            files.push(PlannedFile {
                service: service.name().to_string(),
                kind: FileKind::Registration,
                path: dir.join(register_file_name(service)?),
            });
        }
        Ok(files)
    }

    /// Generate the shared types and registration files for every service.
    ///
    /// Returns `Err` only when the output root cannot be created or the
    /// worker pool cannot start. Per-service failures are in the report.
    #[instrument(
        skip_all,
        fields(
            output = %config.output_dir().display(),
            services = config.services().len()
        )
    )]
    pub fn generate_all(&self, config: &GeneratorConfig) -> DigenResult<GenerationReport> {
        self.filesystem.create_dir_all(config.output_dir())?;

        let services = config.services();
        let mut report = GenerationReport {
            services: services.len(),
            ..GenerationReport::default()
        };

        if services.is_empty() {
            info!("No services to generate");
            self.observer.on_start(0);
            self.observer.on_finish();
            return Ok(report);
        }

        info!("Generating files for {} services", services.len());
        self.observer.on_start(services.len() * 2);

        // Sequential phase: directories and shared types.
        let mut tasks = Vec::with_capacity(services.len());
        for service in services {
            match self.prepare_service(config, service) {
                Ok((types_path, task)) => {
                    report.written.push(types_path);
                    tasks.push(task);
                }
                Err(error) => {
                    warn!(service = %service.name(), error = %error, "Skipping service");
                    self.observer.on_service_failed(service.name(), &error);
                    report.failures.push(ServiceFailure {
                        service: service.name().to_string(),
                        error,
                    });
                }
            }
        }

        // Concurrent phase: registration files.
        let outcomes = self.run_tasks(&tasks)?;
        for (task, outcome) in tasks.iter().zip(outcomes) {
            match outcome {
                Ok(()) => report.written.push(task.path.clone()),
                Err(error) => report.failures.push(ServiceFailure {
                    service: task.service.name().to_string(),
                    error,
                }),
            }
        }

        self.observer.on_finish();
        info!(
            files = report.written.len(),
            failed = report.failures.len(),
            "Generation finished"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Create the service directory, write its shared types, and return the
    /// registration task.
    fn prepare_service<'a>(
        &self,
        config: &'a GeneratorConfig,
        service: &'a ServiceDef,
    ) -> DigenResult<(PathBuf, GenerationTask<'a>)> {
        let dir = service_dir(config.output_dir(), service);
        self.filesystem.create_dir_all(&dir)?;

        let types_path = dir.join(TYPES_FILE_NAME);
        generate_types_file(
            self.filesystem.as_ref(),
            &types_path,
            config.services(),
            config.types_options(),
        )?;
        self.observer
            .on_file_written(service.name(), FileKind::SharedTypes, &types_path);

        let task = GenerationTask {
            service,
            path: dir.join(register_file_name(service)?),
            options: config.register_options(),
        };
        Ok((types_path, task))
    }

    /// Run every task on a bounded pool and wait for all of them.
    ///
    /// Outcomes are returned in task order.
    fn run_tasks(&self, tasks: &[GenerationTask<'_>]) -> DigenResult<Vec<DigenResult<()>>> {
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        let workers = self
            .parallelism
            .or_else(|| std::thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get)
            .min(tasks.len());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("digen-worker-{i}"))
            .build()
            .map_err(|e| ApplicationError::WorkerPool {
                reason: e.to_string(),
            })?;

        debug!(workers, tasks = tasks.len(), "Registration phase started");
        Ok(pool.install(|| tasks.par_iter().map(|task| self.run_task(task)).collect()))
    }

    fn run_task(&self, task: &GenerationTask<'_>) -> DigenResult<()> {
        let name = task.service.name();
        match generate_register_file(self.filesystem.as_ref(), &task.path, task.service, task.options)
        {
            Ok(()) => {
                self.observer
                    .on_file_written(name, FileKind::Registration, &task.path);
                Ok(())
            }
            Err(error) => {
                warn!(service = %name, error = %error, "Registration file failed");
                self.observer.on_service_failed(name, &error);
                Err(error)
            }
        }
    }
}

fn service_dir(root: &Path, service: &ServiceDef) -> PathBuf {
    root.join(service.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use std::sync::{Arc, Mutex};

    fn services(names: &[&str]) -> Vec<ServiceDef> {
        names
            .iter()
            .map(|n| ServiceDef::with_inferred_interface(*n).unwrap())
            .collect()
    }

    fn io_error(path: &Path) -> DigenError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "permission denied".into(),
        }
        .into()
    }

    /// Observer recording every event as a string.
    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl Recorder {
        fn events(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl GenerationObserver for Recorder {
        fn on_start(&self, files: usize) {
            self.0.lock().unwrap().push(format!("start {files}"));
        }
        fn on_file_written(&self, service: &str, kind: FileKind, _path: &Path) {
            self.0
                .lock()
                .unwrap()
                .push(format!("written {service} {kind:?}"));
        }
        fn on_service_failed(&self, service: &str, _error: &DigenError) {
            self.0.lock().unwrap().push(format!("failed {service}"));
        }
        fn on_finish(&self) {
            self.0.lock().unwrap().push("finish".into());
        }
    }

    fn accepting_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs
    }

    #[test]
    fn empty_service_list_is_success_with_no_work() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("out"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file().never();

        let recorder = Recorder::default();
        let report = GenerationService::new(Box::new(fs))
            .with_observer(Box::new(recorder.clone()))
            .generate_all(&GeneratorConfig::new("out", Vec::new()))
            .unwrap();

        assert_eq!(report.services(), 0);
        assert!(report.written().is_empty());
        assert!(report.is_complete());
        assert_eq!(recorder.events(), ["start 0", "finish"]);
    }

    #[test]
    fn root_directory_failure_aborts_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .returning(|p| Err(io_error(p)));
        fs.expect_write_file().never();

        let config = GeneratorConfig::new("out", services(&["a", "b"]));
        let err = GenerationService::new(Box::new(fs))
            .generate_all(&config)
            .unwrap_err();
        assert_eq!(err, io_error(Path::new("out")));
    }

    #[test]
    fn writes_both_files_per_service_in_order() {
        let config = GeneratorConfig::new("out", services(&["userService", "mailer"]));
        let report = GenerationService::new(Box::new(accepting_fs()))
            .generate_all(&config)
            .unwrap()
            .into_result()
            .unwrap();

        assert_eq!(
            report.written(),
            [
                PathBuf::from("out/userService/types.ts"),
                PathBuf::from("out/mailer/types.ts"),
                PathBuf::from("out/userService/registerUserService.ts"),
                PathBuf::from("out/mailer/registerMailer.ts"),
            ]
        );
    }

    #[test]
    fn registration_failure_is_isolated_to_its_service() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, _| p.ends_with("registerB.ts"))
            .returning(|p, _| Err(io_error(p)));
        fs.expect_write_file()
            .withf(|p, _| !p.ends_with("registerB.ts"))
            .returning(|_, _| Ok(()));

        let config = GeneratorConfig::new("out", services(&["a", "b", "c"]));
        let report = GenerationService::new(Box::new(fs))
            .with_parallelism(3)
            .generate_all(&config)
            .unwrap();

        assert_eq!(report.written().len(), 5);
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].service, "b");
        assert_eq!(
            report.into_result().unwrap_err(),
            DigenError::Application(ApplicationError::GenerationIncomplete {
                failed: 1,
                total: 3
            })
        );
    }

    #[test]
    fn shared_types_failure_skips_that_services_registration() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, _| p == Path::new("out/a/types.ts"))
            .times(1)
            .returning(|p, _| Err(io_error(p)));
        fs.expect_write_file()
            .withf(|p, _| p.ends_with("registerA.ts"))
            .never();
        fs.expect_write_file()
            .withf(|p, _| p.starts_with("out/b"))
            .times(2)
            .returning(|_, _| Ok(()));

        let recorder = Recorder::default();
        let config = GeneratorConfig::new("out", services(&["a", "b"]));
        let report = GenerationService::new(Box::new(fs))
            .with_observer(Box::new(recorder.clone()))
            .generate_all(&config)
            .unwrap();

        assert_eq!(
            report.written(),
            [
                PathBuf::from("out/b/types.ts"),
                PathBuf::from("out/b/registerB.ts"),
            ]
        );
        assert_eq!(report.failures()[0].service, "a");
        assert_eq!(
            recorder.events(),
            [
                "start 4",
                "failed a",
                "written b SharedTypes",
                "written b Registration",
                "finish",
            ]
        );
    }

    #[test]
    fn zero_parallelism_still_runs() {
        let config = GeneratorConfig::new("out", services(&["x", "y"]));
        let report = GenerationService::new(Box::new(accepting_fs()))
            .with_parallelism(0)
            .generate_all(&config)
            .unwrap();
        assert_eq!(report.written().len(), 4);
    }

    #[test]
    fn plan_lists_files_without_writing() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let config = GeneratorConfig::new("gen", services(&["order-queue"]));
        let plan = GenerationService::new(Box::new(fs)).plan(&config).unwrap();

        assert_eq!(
            plan,
            [
                PlannedFile {
                    service: "order-queue".into(),
                    kind: FileKind::SharedTypes,
                    path: PathBuf::from("gen/order-queue/types.ts"),
                },
                PlannedFile {
                    service: "order-queue".into(),
                    kind: FileKind::Registration,
                    path: PathBuf::from("gen/order-queue/registerOrderQueue.ts"),
                },
            ]
        );
    }
}
