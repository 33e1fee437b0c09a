use super::Score;
use crate::facts::FileEntry;
use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator};

/// File extensions that hold model weights
const WEIGHT_EXTENSIONS: &[&str] = &[".bin", ".safetensors"];

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Deployment targets the size metric is scored against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum DeviceClass {
    RaspberryPi,
    JetsonNano,
    DesktopPc,
    AwsServer,
}

impl DeviceClass {
    /// Largest weight size, in GiB, the device can reasonably hold
    #[must_use]
    pub const fn limit_gib(self) -> f64 {
        match self {
            Self::RaspberryPi => 0.5,
            Self::JetsonNano => 1.0,
            Self::DesktopPc => 6.0,
            Self::AwsServer => 15.0,
        }
    }
}

/// Size feasibility per device class
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SizeScore {
    pub raspberry_pi: f64,
    pub jetson_nano: f64,
    pub desktop_pc: f64,
    pub aws_server: f64,
}

impl SizeScore {
    #[must_use]
    pub const fn get(&self, device: DeviceClass) -> f64 {
        match device {
            DeviceClass::RaspberryPi => self.raspberry_pi,
            DeviceClass::JetsonNano => self.jetson_nano,
            DeviceClass::DesktopPc => self.desktop_pc,
            DeviceClass::AwsServer => self.aws_server,
        }
    }

    const fn set(&mut self, device: DeviceClass, value: f64) {
        match device {
            DeviceClass::RaspberryPi => self.raspberry_pi = value,
            DeviceClass::JetsonNano => self.jetson_nano = value,
            DeviceClass::DesktopPc => self.desktop_pc = value,
            DeviceClass::AwsServer => self.aws_server = value,
        }
    }
}

impl Score for SizeScore {
    /// The most constrained device decides
    fn value(&self) -> f64 {
        DeviceClass::iter().map(|device| self.get(device)).fold(f64::INFINITY, f64::min)
    }
}

/// Total bytes of the weight files in a model's file list
#[must_use]
pub fn weight_bytes(files: &[FileEntry]) -> u64 {
    files
        .iter()
        .filter(|f| {
            let name = f.name.to_lowercase();
            WEIGHT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
        })
        .map(|f| f.size)
        .fold(0, u64::saturating_add)
}

/// Score how comfortably the model's weights fit each device class.
///
/// Each class scores `1 - size / limit`, clamped to `[0, 1]` and left unrounded. A model
/// without any weight bytes, including weight files listed with no size, scores 0.0 everywhere.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "byte totals are far below 2^52")]
pub fn score(files: &[FileEntry]) -> SizeScore {
    let size_gib = weight_bytes(files) as f64 / BYTES_PER_GIB;

    let mut result = SizeScore::default();
    if size_gib > 0.0 {
        for device in DeviceClass::iter() {
            result.set(device, (1.0 - size_gib / device.limit_gib()).clamp(0.0, 1.0));
        }
    }

    result
}
