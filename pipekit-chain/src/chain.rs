use std::fmt;

use tracing::debug;

use crate::error::{ChainError, StageError};
use crate::settings::ChainSettings;

type InfallibleStage<T> = Box<dyn Fn(T) -> T + Send + Sync>;
type FallibleStage<T, E> = Box<dyn Fn(T) -> Result<T, E> + Send + Sync>;

struct NamedStage<S> {
    name: String,
    run: S,
}

/// Stage list plus the bookkeeping both chain kinds share.
struct Stages<S> {
    name: String,
    settings: ChainSettings,
    stages: Vec<NamedStage<S>>,
}

impl<S> Stages<S> {
    fn new(name: String, settings: ChainSettings) -> Self {
        Self {
            name,
            settings,
            stages: Vec::new(),
        }
    }

    fn ensure_room(&self, adding: usize, stage: &str) -> Result<(), ChainError> {
        match self.settings.max_stages {
            Some(limit) if self.stages.len() + adding > limit => {
                Err(ChainError::StageLimitExceeded {
                    chain: self.name.clone(),
                    stage: stage.to_string(),
                    limit,
                })
            }
            _ => Ok(()),
        }
    }

    fn push(&mut self, name: String, run: S) -> Result<(), ChainError> {
        self.ensure_room(1, &name)?;
        self.stages.push(NamedStage { name, run });
        Ok(())
    }

    /// All or nothing: on error `self` is unchanged.
    fn append(&mut self, other: Stages<S>) -> Result<(), ChainError> {
        if let Some(first) = other.stages.first() {
            self.ensure_room(other.stages.len(), &first.name)?;
        }
        self.stages.extend(other.stages);
        Ok(())
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|s| s.name.as_str())
    }

    fn trace(&self, index: usize, stage: &str) {
        if self.settings.trace_stages {
            debug!(chain = %self.name, stage, index, "running stage");
        }
    }
}

impl<S> fmt::Debug for Stages<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("name", &self.name)
            .field("settings", &self.settings)
            .field("stages", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

/// An ordered, reusable list of named `T -> T` stages.
///
/// ```
/// use pipekit_chain::Chain;
///
/// let normalize = Chain::new("normalize")
///     .stage("trim", |s: String| s.trim().to_string())?
///     .stage("lower", |s: String| s.to_lowercase())?;
///
/// assert_eq!(normalize.run("  Hello ".to_string()), "hello");
/// assert_eq!(normalize.run("WORLD".to_string()), "world");
/// # Ok::<(), pipekit_chain::ChainError>(())
/// ```
pub struct Chain<T> {
    inner: Stages<InfallibleStage<T>>,
}

impl<T> Chain<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_settings(name, ChainSettings::default())
    }

    pub fn with_settings(name: impl Into<String>, settings: ChainSettings) -> Self {
        Self {
            inner: Stages::new(name.into(), settings),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn settings(&self) -> &ChainSettings {
        &self.inner.settings
    }

    /// Append a stage. Fails only when `max_stages` would be exceeded.
    pub fn push<F>(&mut self, name: impl Into<String>, stage: F) -> Result<(), ChainError>
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.inner.push(name.into(), Box::new(stage))
    }

    /// Builder form of [`push`](Self::push).
    pub fn stage<F>(mut self, name: impl Into<String>, stage: F) -> Result<Self, ChainError>
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.push(name, stage)?;
        Ok(self)
    }

    /// Move every stage of `other` to the end of this chain.
    ///
    /// The cap of `self` applies to the combined length. On error nothing is moved.
    pub fn append(&mut self, other: Chain<T>) -> Result<(), ChainError> {
        self.inner.append(other.inner)
    }

    pub fn len(&self) -> usize {
        self.inner.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.stages.is_empty()
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &str> {
        self.inner.names()
    }

    /// Thread `value` through every stage in order. An empty chain returns `value`.
    pub fn run(&self, value: T) -> T {
        let stages = self.inner.stages.iter().enumerate().map(|(index, stage)| {
            move |acc: T| {
                self.inner.trace(index, &stage.name);
                (stage.run)(acc)
            }
        });
        pipekit::pipe_all(value, stages)
    }

    /// Turn the chain into a plain function.
    pub fn into_fn(self) -> impl Fn(T) -> T {
        move |value| self.run(value)
    }
}

impl<T> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

/// An ordered, reusable list of named `T -> Result<T, E>` stages.
///
/// The first stage to return `Err` ends the run; its error comes back inside a
/// [`StageError`] that also names the stage.
pub struct TryChain<T, E> {
    inner: Stages<FallibleStage<T, E>>,
}

impl<T, E> TryChain<T, E>
where
    E: std::error::Error + 'static,
{
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_settings(name, ChainSettings::default())
    }

    pub fn with_settings(name: impl Into<String>, settings: ChainSettings) -> Self {
        Self {
            inner: Stages::new(name.into(), settings),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn settings(&self) -> &ChainSettings {
        &self.inner.settings
    }

    pub fn push<F>(&mut self, name: impl Into<String>, stage: F) -> Result<(), ChainError>
    where
        F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
    {
        self.inner.push(name.into(), Box::new(stage))
    }

    pub fn stage<F>(mut self, name: impl Into<String>, stage: F) -> Result<Self, ChainError>
    where
        F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
    {
        self.push(name, stage)?;
        Ok(self)
    }

    pub fn append(&mut self, other: TryChain<T, E>) -> Result<(), ChainError> {
        self.inner.append(other.inner)
    }

    pub fn len(&self) -> usize {
        self.inner.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.stages.is_empty()
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &str> {
        self.inner.names()
    }

    /// Thread `value` through the stages, stopping at the first `Err`.
    pub fn run(&self, value: T) -> Result<T, StageError<E>> {
        let stages = self.inner.stages.iter().enumerate().map(|(index, stage)| {
            move |acc: T| {
                self.inner.trace(index, &stage.name);
                (stage.run)(acc).map_err(|source| {
                    debug!(
                        chain = %self.inner.name,
                        stage = %stage.name,
                        index,
                        error = %source,
                        "stage failed"
                    );
                    StageError {
                        chain: self.inner.name.clone(),
                        stage: stage.name.clone(),
                        index,
                        source,
                    }
                })
            }
        });
        pipekit::try_pipe_all(value, stages)
    }
}

impl<T, E> fmt::Debug for TryChain<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}
