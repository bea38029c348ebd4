//! Draw pass: one stroked line segment per particle

use confetti_particles::ParticleStore;

use crate::surface::{StrokeStyle, Surface};

/// Paint every particle in store order.
///
/// Each flake is a single segment from `(x + d/2 + tilt, y)` to
/// `(x + tilt, y + tilt + d/2)` stroked at width `d`. With `gradient` set the
/// stroke runs a two-stop gradient from the primary to the secondary color
/// along that same segment; otherwise it is a solid primary stroke.
///
/// The caller clears the surface before this pass; the renderer itself never
/// clears.
pub fn draw_particles(surface: &mut dyn Surface, store: &ParticleStore, gradient: bool) {
    for particle in store.iter() {
        surface.set_line_width(particle.diameter);

        let x2 = particle.x + particle.tilt;
        let x = x2 + particle.diameter / 2.0;
        let y2 = particle.y + particle.tilt + particle.diameter / 2.0;

        let style = if gradient {
            StrokeStyle::LinearGradient {
                from: (x, particle.y),
                to: (x2, y2),
                stops: vec![(0.0, particle.color), (1.0, particle.color2)],
            }
        } else {
            StrokeStyle::Solid(particle.color)
        };
        surface.set_stroke_style(style);

        surface.move_to(x, particle.y);
        surface.line_to(x2, y2);
        surface.stroke();
    }
}
