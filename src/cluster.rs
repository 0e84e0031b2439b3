use std::cell::RefCell;
use std::rc::{Rc, Weak};

use thiserror::Error;

use crate::config::STORAGE_CAPACITY_PB;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClusterStateError {
    #[error("cluster state accessed outside its provider scope")]
    ProviderDropped,
}

/// Общие метрики кластера. Счётчики анимируются экраном статуса,
/// ёмкость хранилища статична и никогда не меняется.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterMetrics {
    pub nodes_online: u32,
    pub total_cores: u32,
    pub memory_available: u32,
    pub storage_capacity: f64,
    pub launch_complete: bool,
}

impl Default for ClusterMetrics {
    fn default() -> Self {
        Self {
            nodes_online: 0,
            total_cores: 0,
            memory_available: 0,
            storage_capacity: STORAGE_CAPACITY_PB,
            launch_complete: false,
        }
    }
}

/// Владелец общего состояния. Живёт столько же, сколько приложение;
/// выдаёт дескрипторы, которые перестают работать после его Drop.
#[derive(Debug, Default)]
pub struct ClusterProvider {
    inner: Rc<RefCell<ClusterMetrics>>,
}

impl ClusterProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> ClusterHandle {
        ClusterHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

/// Дескриптор общего состояния. Доступ после Drop владельца - это ошибка
/// композиции, и она должна падать громко, а не возвращать значение по
/// умолчанию.
#[derive(Debug, Clone)]
pub struct ClusterHandle {
    inner: Weak<RefCell<ClusterMetrics>>,
}

impl ClusterHandle {
    pub fn read(&self) -> Result<ClusterMetrics, ClusterStateError> {
        let rc = self.inner.upgrade().ok_or(ClusterStateError::ProviderDropped)?;
        let metrics = *rc.borrow();
        Ok(metrics)
    }

    pub fn write(
        &self,
        mutate: impl FnOnce(&mut ClusterMetrics),
    ) -> Result<(), ClusterStateError> {
        let rc = self.inner.upgrade().ok_or(ClusterStateError::ProviderDropped)?;
        mutate(&mut rc.borrow_mut());
        Ok(())
    }

    pub fn set_launch_complete(&self, value: bool) -> Result<(), ClusterStateError> {
        self.write(|m| m.launch_complete = value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_start_at_zero_with_static_storage() {
        let provider = ClusterProvider::new();
        let metrics = provider.handle().read().unwrap();

        assert_eq!(metrics.nodes_online, 0);
        assert_eq!(metrics.total_cores, 0);
        assert_eq!(metrics.memory_available, 0);
        assert_eq!(metrics.storage_capacity, 1.5);
        assert!(!metrics.launch_complete);
    }

    #[test]
    fn writes_are_visible_to_other_handles() {
        let provider = ClusterProvider::new();
        let writer = provider.handle();
        let reader = provider.handle();

        writer.write(|m| m.nodes_online = 14).unwrap();
        writer.set_launch_complete(true).unwrap();

        let metrics = reader.read().unwrap();
        assert_eq!(metrics.nodes_online, 14);
        assert!(metrics.launch_complete);
    }

    #[test]
    fn access_after_provider_drop_fails_loudly() {
        let provider = ClusterProvider::new();
        let handle = provider.handle();
        drop(provider);

        assert_eq!(handle.read(), Err(ClusterStateError::ProviderDropped));
        assert_eq!(
            handle.write(|m| m.nodes_online = 1),
            Err(ClusterStateError::ProviderDropped)
        );
    }
}
