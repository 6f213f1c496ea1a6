use fps_camera::{
    Button, CameraMode, CameraPose, CameraSettings, FirstPersonCamera, InputSnapshot,
    MovementKeyBindings,
};
use glam::{Vec2, Vec3};

#[cfg(test)]
mod camera_tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn started() -> (FirstPersonCamera, CameraPose, InputSnapshot) {
        let mut camera = FirstPersonCamera::default();
        let mut pose = CameraPose::default();
        let mut input = InputSnapshot::new();
        camera.init(&mut pose, &mut input);
        pose.position = Vec3::new(0.0, 1.85, 0.0);
        (camera, pose, input)
    }

    /// Deterministic pointer jitter in [-range, range]
    fn jitter(seed: &mut u32, range: f32) -> f32 {
        *seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        ((*seed >> 8) as f32 / (1u32 << 24) as f32) * 2.0 * range - range
    }

    #[test]
    fn test_pitch_stays_within_limit_for_any_pointer_sequence() {
        let (mut camera, mut pose, mut input) = started();
        let limit = 85.0_f32.to_radians();
        let mut seed = 7;

        for _ in 0..2_000 {
            let dx = jitter(&mut seed, 400.0);
            let dy = jitter(&mut seed, 900.0);
            input.move_pointer(dx, dy);
            camera.update(&mut pose, &input);

            assert!(
                camera.pitch() >= -limit && camera.pitch() <= limit,
                "pitch {} escaped the clamp",
                camera.pitch()
            );
        }
    }

    #[test]
    fn test_height_fixed_regardless_of_keys() {
        let (mut camera, mut pose, mut input) = started();
        let keys = [
            Button::KeyW,
            Button::KeyS,
            Button::KeyD,
            Button::KeyA,
            Button::KeyE,
            Button::KeyQ,
        ];
        let mut seed = 42;

        for (i, key) in keys.iter().cycle().take(120).enumerate() {
            input.down.clear();
            input.press(*key);
            if i % 3 == 0 {
                input.press(Button::KeyE);
            }
            input.move_pointer(jitter(&mut seed, 50.0), jitter(&mut seed, 50.0));
            camera.update(&mut pose, &input);

            assert_eq!(pose.position.y, 1.85);
        }
    }

    #[test]
    fn test_forward_and_back_cancel() {
        let (mut camera, mut pose, mut input) = started();
        input.move_pointer(137.0, -42.0);
        camera.update(&mut pose, &input);
        let before = pose.position;

        input.press(Button::KeyW);
        input.press(Button::KeyS);
        camera.update(&mut pose, &input);

        assert_eq!(pose.position, before);
    }

    #[test]
    fn test_left_and_right_cancel() {
        let (mut camera, mut pose, mut input) = started();
        input.press(Button::KeyA);
        input.press(Button::KeyD);

        camera.update(&mut pose, &input);

        assert_eq!(pose.position, Vec3::new(0.0, 1.85, 0.0));
    }

    #[test]
    fn test_target_at_focus_distance_along_look_direction() {
        let (mut camera, mut pose, mut input) = started();
        input.press(Button::KeyW);
        input.press(Button::KeyD);
        let mut seed = 3;

        for _ in 0..200 {
            input.move_pointer(jitter(&mut seed, 80.0), jitter(&mut seed, 80.0));
            camera.update(&mut pose, &input);

            let offset = pose.target - pose.position;
            assert!((offset.length() - 25.0).abs() < EPS);

            let expected = Vec3::new(
                -camera.yaw().sin() * camera.pitch().cos(),
                camera.pitch().sin(),
                -camera.yaw().cos() * camera.pitch().cos(),
            ) * 25.0;
            assert!((offset - expected).length() < EPS);
        }
    }

    #[test]
    fn test_forward_step_scenario() {
        let (mut camera, mut pose, mut input) = started();
        input.press(Button::KeyW);

        camera.update(&mut pose, &input);

        assert!(pose.position.x.abs() < EPS);
        assert_eq!(pose.position.y, 1.85);
        assert!((pose.position.z + 0.05).abs() < EPS);
        assert!((pose.target - Vec3::new(0.0, 1.85, -25.05)).length() < EPS);
    }

    #[test]
    fn test_pointer_delta_scenario() {
        let (mut camera, mut pose, mut input) = started();
        input.move_pointer(100.0, 0.0);

        camera.update(&mut pose, &input);

        assert!((camera.yaw() - (-100.0 * 0.003)).abs() < 1e-6);
        assert_eq!(camera.pitch(), 0.0);
    }

    #[test]
    fn test_idle_update_is_fixed_point() {
        let (mut camera, mut pose, mut input) = started();
        input.move_pointer(-60.0, 25.0);
        input.press(Button::KeyW);
        camera.update(&mut pose, &input);
        input.release(Button::KeyW);

        let pose_before = pose;
        let (yaw, pitch) = (camera.yaw(), camera.pitch());

        for _ in 0..5 {
            camera.update(&mut pose, &input);
        }

        assert_eq!(pose.position, pose_before.position);
        assert_eq!(pose.target, pose_before.target);
        assert_eq!((camera.yaw(), camera.pitch()), (yaw, pitch));
    }

    #[test]
    fn test_scroll_does_not_move_camera() {
        let (mut camera, mut pose, mut input) = started();
        camera.update(&mut pose, &input);
        let before = pose;

        input.scroll = 3.0;
        camera.update(&mut pose, &input);

        assert_eq!(pose, before);
    }

    #[test]
    fn test_init_marks_first_person_and_locks_cursor() {
        let mut camera = FirstPersonCamera::default();
        let mut pose = CameraPose::default();
        let mut input = InputSnapshot::with_state(Vec2::new(320.0, 240.0), &[]);

        camera.init(&mut pose, &mut input);

        assert_eq!(pose.mode, CameraMode::FirstPerson);
        assert_eq!(pose.up, Vec3::Y);
        assert!(input.cursor_disabled);
    }

    #[test]
    fn test_custom_bindings_and_eye_height() {
        let settings = CameraSettings {
            eye_height: 1.6,
            bindings: MovementKeyBindings {
                forward: Button::ArrowUp,
                back: Button::ArrowDown,
                ..MovementKeyBindings::default()
            },
            ..CameraSettings::default()
        };
        let mut camera = FirstPersonCamera::new(settings);
        let mut pose = CameraPose::default();
        let mut input = InputSnapshot::new();
        camera.init(&mut pose, &mut input);
        pose.position = Vec3::ZERO;

        input.press(Button::KeyW);
        camera.update(&mut pose, &input);
        assert_eq!(pose.position, Vec3::new(0.0, 1.6, 0.0));

        input.press(Button::ArrowUp);
        camera.update(&mut pose, &input);
        assert!((pose.position.z + 0.05).abs() < EPS);
    }

    #[test]
    fn test_turned_camera_walks_along_yaw() {
        let (mut camera, mut pose, mut input) = started();
        // Quarter turn: yaw = +pi/2, facing -X
        let pixels = -(std::f32::consts::FRAC_PI_2 / 0.003);
        input.move_pointer(pixels, 0.0);
        camera.update(&mut pose, &input);

        input.press(Button::KeyW);
        camera.update(&mut pose, &input);

        assert!((pose.position.x + 0.05).abs() < EPS);
        assert!(pose.position.z.abs() < EPS);
    }
}
