use crate::backend::AttendanceSource;
use crate::calendar::build_grid;
use crate::models::MonthGrid;
use crate::period::{Direction, DisplayPeriod};
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub enum RenderOutcome {
    Rendered(MonthGrid),
    /// A navigation landed while the fetch was in flight; the result was dropped.
    Superseded,
}

#[derive(Debug)]
struct CalendarInstance {
    period: DisplayPeriod,
    generation: u64,
    displayed: Option<MonthGrid>,
}

/// Named calendar widgets, each with its own displayed month.
#[derive(Debug)]
pub struct CalendarBoard {
    order: Vec<String>,
    instances: Mutex<HashMap<String, CalendarInstance>>,
}

impl CalendarBoard {
    pub fn new<I, S>(ids: I, period: DisplayPeriod) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut order = Vec::new();
        let mut instances = HashMap::new();
        for id in ids {
            let id = id.into();
            if instances.contains_key(&id) {
                continue;
            }
            instances.insert(
                id.clone(),
                CalendarInstance {
                    period,
                    generation: 0,
                    displayed: None,
                },
            );
            order.push(id);
        }

        Self {
            order,
            instances: Mutex::new(instances),
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub async fn period(&self, id: &str) -> Option<DisplayPeriod> {
        self.instances.lock().await.get(id).map(|instance| instance.period)
    }

    /// Last grid committed for `id`, whichever render produced it.
    pub async fn current(&self, id: &str) -> Option<MonthGrid> {
        self.instances
            .lock()
            .await
            .get(id)
            .and_then(|instance| instance.displayed.clone())
    }

    /// Fetches attendance for the instance's period and redraws it.
    ///
    /// Returns `None` when no calendar is registered under `id`. A failed
    /// fetch renders with no attendance data.
    pub async fn render<S: AttendanceSource>(
        &self,
        id: &str,
        source: &S,
        today: NaiveDate,
    ) -> Option<RenderOutcome> {
        let (period, generation) = {
            let instances = self.instances.lock().await;
            let Some(instance) = instances.get(id) else {
                debug!(calendar = id, "no such calendar, skipping render");
                return None;
            };
            (instance.period, instance.generation)
        };

        let attendance = match source.fetch_month(period).await {
            Ok(attendance) => attendance,
            Err(err) => {
                warn!(calendar = id, period = %period.title(), "could not fetch attendance: {err}");
                Default::default()
            }
        };
        let grid = build_grid(id, period, &attendance, today);

        let mut instances = self.instances.lock().await;
        let instance = instances.get_mut(id)?;
        if instance.generation != generation {
            debug!(calendar = id, period = %period.title(), "dropping superseded render");
            return Some(RenderOutcome::Superseded);
        }
        instance.displayed = Some(grid.clone());
        Some(RenderOutcome::Rendered(grid))
    }

    /// Moves the instance one month in `direction` and re-renders it.
    pub async fn navigate<S: AttendanceSource>(
        &self,
        id: &str,
        direction: Direction,
        source: &S,
        today: NaiveDate,
    ) -> Option<RenderOutcome> {
        self.shift(id, direction).await?;
        self.render(id, source, today).await
    }

    async fn shift(&self, id: &str, direction: Direction) -> Option<DisplayPeriod> {
        let mut instances = self.instances.lock().await;
        let Some(instance) = instances.get_mut(id) else {
            debug!(calendar = id, "no such calendar, skipping navigation");
            return None;
        };

        match instance.period.shifted(direction) {
            Some(next) => {
                info!(calendar = id, from = %instance.period.title(), to = %next.title(), "navigating");
                instance.period = next;
            }
            None => warn!(calendar = id, "navigation would leave the supported date range"),
        }
        instance.generation = instance.generation.wrapping_add(1);
        Some(instance.period)
    }
}
