/// Canvas options.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasSetup {
    /// Is vsync enabled?
    pub vsync: bool,
    /// Can the user resize the window?
    pub resizable: bool,
}

impl Default for CanvasSetup {
    fn default() -> Self {
        CanvasSetup {
            vsync: true,
            resizable: false,
        }
    }
}

impl CanvasSetup {
    /// The presentation mode matching the vsync setting.
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vsync_selects_present_mode() {
        assert_eq!(
            CanvasSetup::default().present_mode(),
            wgpu::PresentMode::AutoVsync
        );
        let setup = CanvasSetup {
            vsync: false,
            ..CanvasSetup::default()
        };
        assert_eq!(setup.present_mode(), wgpu::PresentMode::AutoNoVsync);
    }
}
