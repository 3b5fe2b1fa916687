use std::{ops::Deref, rc::Rc};

use feedback_dashboard_shared::dashboard::{DashboardAction, DashboardState};
use yew::prelude::*;

/// Yew-side wrapper so the shared reducer can drive `use_reducer`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStore(DashboardState);

impl Deref for DashboardStore {
    type Target = DashboardState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.0.apply(action);
        Rc::new(next)
    }
}

pub type DashboardHandle = UseReducerHandle<DashboardStore>;
