use crate::api::error::SurfaceError;
use crate::components::entity::{Entity, FrameContext};
use crate::components::layer::Layer;
use crate::components::shooting_star::ShootingStar;
use crate::renderer::surface::DrawSurface;
use crate::systems::sun::Sun;

/// Outcome of one compositing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Draw calls that succeeded (entities, the streak and the sun).
    pub drawn: usize,
    /// Draw calls that failed and were skipped.
    pub failed: usize,
}

/// Everything painted in one frame, borrowed from the scene.
pub struct LayerSources<'a> {
    pub entities: &'a [Entity],
    pub shooting_star: Option<&'a ShootingStar>,
    pub sun: &'a Sun,
}

/// Paint `sources` back to front in `Layer::ORDER`.
///
/// A failing draw is logged and skipped; the rest of the frame is still
/// painted. The surface is expected to have been cleared already.
pub fn draw_layers(
    surface: &mut dyn DrawSurface,
    sources: &LayerSources<'_>,
    ctx: &FrameContext,
) -> FrameStats {
    let mut stats = FrameStats::default();
    let mut record = |layer: Layer, result: Result<(), SurfaceError>| match result {
        Ok(()) => stats.drawn += 1,
        Err(err) => {
            stats.failed += 1;
            log::debug!("{layer:?}: draw skipped: {err}");
        }
    };

    for layer in Layer::ORDER {
        match layer {
            Layer::ShootingStar => {
                if let Some(star) = sources.shooting_star {
                    record(layer, star.draw(surface));
                }
            }
            Layer::Sun => record(layer, sources.sun.draw(surface, ctx)),
            _ => {
                for entity in sources.entities.iter().filter(|e| e.layer() == layer) {
                    record(layer, entity.draw(surface, ctx));
                }
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::GalaxyConfig;
    use crate::api::types::ImageId;
    use crate::components::greeting::GreetingStar;
    use crate::components::sector::SectorId;
    use crate::components::sector_pin::SectorPin;
    use crate::core::rng::Rng;
    use crate::renderer::draw_list::{DrawCommand, DrawList};
    use crate::renderer::surface::Filter;
    use glam::Vec2;
    use std::f32::consts::FRAC_PI_2;

    fn greeting(angle: f32, image: u32) -> Entity {
        Entity::Greeting(GreetingStar { angle, image: Some(ImageId(image)) })
    }

    #[test]
    fn greetings_wrap_around_the_sun() {
        let entities = vec![greeting(FRAC_PI_2, 1), greeting(-FRAC_PI_2, 2)];
        let sun = Sun::new(&GalaxyConfig::default());
        let mut list = DrawList::new(800, 600);
        list.mark_ready(ImageId(1));
        list.mark_ready(ImageId(2));
        let sources = LayerSources { entities: &entities, shooting_star: None, sun: &sun };
        let stats = draw_layers(&mut list, &sources, &FrameContext::test(4.0));
        assert_eq!(stats, FrameStats { drawn: 3, failed: 0 });

        let kinds: Vec<&str> = list
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Image { image: ImageId(2), .. } => "back",
                DrawCommand::Image { image: ImageId(1), .. } => "front",
                DrawCommand::Text { .. } => "prompt",
                _ => "sun",
            })
            .collect();
        let back = kinds.iter().position(|k| *k == "back").unwrap();
        let first_sun = kinds.iter().position(|k| *k == "sun").unwrap();
        let front = kinds.iter().position(|k| *k == "front").unwrap();
        assert!(back < first_sun);
        assert!(first_sun < front);
        assert_eq!(front, kinds.len() - 1);
    }

    #[test]
    fn failing_entity_does_not_stop_the_frame() {
        let entities = vec![greeting(FRAC_PI_2 + 0.3, 1), greeting(FRAC_PI_2 - 0.3, 2)];
        let sun = Sun::new(&GalaxyConfig::default());
        let mut list = DrawList::new(800, 600);
        list.mark_broken(ImageId(1));
        list.mark_ready(ImageId(2));
        let sources = LayerSources { entities: &entities, shooting_star: None, sun: &sun };
        let stats = draw_layers(&mut list, &sources, &FrameContext::test(4.0));
        assert_eq!(stats.failed, 1);
        assert!(list
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Image { image: ImageId(2), .. })));
        assert_eq!(list.save_depth(), 0);
    }

    #[test]
    fn shooting_star_sits_above_deep_space() {
        let mut rng = Rng::new(4);
        let entities = vec![
            Entity::Sector(SectorPin::new(SectorId::Bio, &mut rng, None)),
            Entity::DeepSpace(crate::components::deep_star::DeepSpaceStar::new(&mut rng)),
        ];
        let star = ShootingStar { pos: Vec2::new(300.0, 50.0), velocity: Vec2::new(-10.0, 3.0), life: 0.5 };
        let sun = Sun::new(&GalaxyConfig::default());
        let mut list = DrawList::new(800, 600);
        let sources = LayerSources { entities: &entities, shooting_star: Some(&star), sun: &sun };
        draw_layers(&mut list, &sources, &FrameContext::test(1.0));
        let cmds = list.commands();
        // Deep star dot, streak, pin dot, then the sun.
        assert!(matches!(cmds[0], DrawCommand::Circle { .. }));
        assert!(matches!(cmds[1], DrawCommand::Line { .. }));
        match &cmds[2] {
            DrawCommand::Circle { radius, style, .. } => {
                assert_eq!(*radius, 3.0);
                assert_eq!(style.filter, Filter::None);
            }
            other => panic!("expected pin dot, got {other:?}"),
        }
        assert!(matches!(cmds[3], DrawCommand::Ellipse { .. }));
    }
}
