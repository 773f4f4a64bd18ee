use std::fmt;

/// Where the caller would like inference to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevicePreference {
    #[default]
    Auto,
    Cpu,
    Accelerator,
}

/// Where inference actually runs. Resolved once when the model is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Cpu,
    Accelerator,
}

impl Device {
    pub fn resolve(preference: DevicePreference, accelerator_available: bool) -> Self {
        match preference {
            DevicePreference::Cpu => Device::Cpu,
            DevicePreference::Auto | DevicePreference::Accelerator => {
                if accelerator_available {
                    Device::Accelerator
                } else {
                    Device::Cpu
                }
            }
        }
    }

    /// True when an explicit accelerator request could not be honored.
    pub fn is_fallback(self, preference: DevicePreference) -> bool {
        preference == DevicePreference::Accelerator && self == Device::Cpu
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => f.write_str("cpu"),
            Device::Accelerator => f.write_str("accelerator"),
        }
    }
}
