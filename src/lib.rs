/*!
# demoscene

Small windowed rendering demos, each a self-contained loop of
initialize → update → draw → present → delay:

* `forest`: a snowy forest with parallax tree layers, falling snowflakes and a rolling ball.
* `pyramid`: a square-based wireframe pyramid spinning about its vertical axis.
* `pulse`: a wireframe tetrahedron that grows and shrinks with time.

Scenes draw into a CPU [`Framebuffer`](resource::Framebuffer) using simple
2D renderer semantics (integer rectangles, inclusive lines, stretched
sprites). The [`Window`](window::Window) uploads it to the GPU with wgpu and
presents it, then sleeps for a fixed frame delay.

A rotating wireframe pyramid is as simple as:

```no_run
use demoscene::prelude::*;

fn main() -> demoscene::Result<()> {
    let mut window = pollster::block_on(Window::new("pyramid"))?;
    let mut fb = Framebuffer::new(window.width(), window.height());
    let mut pyramid = RotatingPyramid::default();

    loop {
        pyramid.update();
        pyramid.draw(&mut fb);

        if !window.render(&fb) {
            break;
        }
    }

    Ok(())
}
```

Everything but the window itself runs without a GPU, so the per-frame
arithmetic is covered by plain unit tests.
*/
#![allow(clippy::module_inception)]

pub mod camera;
pub mod color;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod procedural;
pub mod renderer;
pub mod resource;
pub mod scene;
pub mod window;
pub mod wireframe;

pub use error::{Error, Result};
pub use glamx;

pub mod prelude {
    pub use crate::camera::*;
    pub use crate::color::{self, Color};
    pub use crate::config::*;
    pub use crate::event::*;
    pub use crate::procedural::*;
    pub use crate::resource::*;
    pub use crate::scene::*;
    pub use crate::window::*;
    pub use crate::wireframe::*;
    pub use glamx::Vec3;
}
