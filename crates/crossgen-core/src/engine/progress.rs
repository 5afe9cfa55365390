#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    AttemptsStart { total: u64 },
    AttemptFinish { attempt: usize, placed: usize, total_words: usize },
    AttemptsFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::Message("nobody listens".to_string()));
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let seen = Mutex::new(Vec::new());
        {
            let reporter = ProgressReporter::with_callback(Box::new(|event| {
                seen.lock().unwrap().push(event);
            }));
            reporter.report(Progress::PhaseStart { name: "Layout" });
            reporter.report(Progress::AttemptFinish {
                attempt: 1,
                placed: 3,
                total_words: 4,
            });
            reporter.report(Progress::PhaseFinish);
        }

        let seen = seen.into_inner().unwrap();
        assert_eq!(
            seen,
            vec![
                Progress::PhaseStart { name: "Layout" },
                Progress::AttemptFinish {
                    attempt: 1,
                    placed: 3,
                    total_words: 4,
                },
                Progress::PhaseFinish,
            ]
        );
    }
}
