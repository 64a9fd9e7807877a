//! Frame rate limiting
//!
//! Advisory only: the simulation always steps by the measured frame time,
//! so a missed deadline slows nothing down.

use macroquad::prelude::get_time;

pub struct FramePacer {
    /// Seconds per frame, None = unlocked
    target_frame_time: Option<f64>,
}

impl FramePacer {
    pub fn new(target_fps: f64) -> Self {
        let target_frame_time = if target_fps.is_finite() && target_fps > 0.0 {
            Some(1.0 / target_fps)
        } else {
            None
        };
        Self { target_frame_time }
    }

    pub fn target_frame_time(&self) -> Option<f64> {
        self.target_frame_time
    }

    /// Block until the frame that began at `frame_start` has used its budget
    pub fn wait(&self, frame_start: f64) {
        let Some(target_frame_time) = self.target_frame_time else { return };
        if get_time() - frame_start >= target_frame_time {
            return;
        }

        // Native: use sleep for bulk, then spin-wait for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            let spin_margin = 0.002; // 2ms
            while get_time() - frame_start + spin_margin < target_frame_time {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while get_time() - frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
        // WASM: no thread::sleep available
        #[cfg(target_arch = "wasm32")]
        {
            while get_time() - frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_fps_budget() {
        let pacer = FramePacer::new(60.0);
        let t = pacer.target_frame_time().unwrap();
        assert!((t - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_rate_is_unlocked() {
        assert_eq!(FramePacer::new(0.0).target_frame_time(), None);
        assert_eq!(FramePacer::new(f64::INFINITY).target_frame_time(), None);
    }
}
