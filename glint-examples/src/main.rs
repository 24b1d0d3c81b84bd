mod platform;

use glfw::{Action, Context as _, Key, WindowEvent};
use glint_examples::{Example, ExampleError, InputAction, LoopFeedback};
use glint_glfw::{GlfwSurface, GlfwSurfaceError};
use glint_windowing::{WindowDim, WindowOpt};
use platform::DesktopPlatformServices;
use std::{error::Error, fmt, iter, path::PathBuf, process, time::Instant};
use structopt::StructOpt;

const WINDOW_TITLE: &str = "LearnOpenGL";
const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

// keys producing an action on every frame they are held down
const HELD_KEYS: [(Key, InputAction); 6] = [
  (Key::W, InputAction::Forward),
  (Key::S, InputAction::Backward),
  (Key::A, InputAction::Left),
  (Key::D, InputAction::Right),
  (Key::Up, InputAction::Up),
  (Key::Down, InputAction::Down),
];

#[derive(Debug, StructOpt)]
pub struct CLIOpts {
  #[structopt(short, long, parse(from_os_str))]
  /// Directory where to pick shaders, textures and materials from.
  assets: Option<PathBuf>,

  #[structopt(short, long)]
  /// List available examples.
  list_examples: bool,

  /// Example to run.
  example: Option<String>,
}

/// Fatal errors of the runner.
#[derive(Debug)]
enum AppError {
  CannotCreateSurface(GlfwSurfaceError),
  CannotBootstrap(&'static str, ExampleError),
}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      AppError::CannotCreateSurface(ref e) => write!(f, "cannot create rendering surface: {}", e),
      AppError::CannotBootstrap(name, ref e) => write!(f, "cannot bootstrap {}: {}", name, e),
    }
  }
}

impl Error for AppError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      AppError::CannotCreateSurface(e) => Some(e),
      AppError::CannotBootstrap(_, e) => Some(e),
    }
  }
}

/// Macro to declaratively add examples.
macro_rules! examples {
  ($($ex_name:literal, $ex_ident:ident),* $(,)?) => {
    fn show_available_examples() {
      println!("available examples:");
      $( println!("  - {}", $ex_name); )*
    }

    // run an example based on its name
    fn pick_and_run_example(cli_opts: CLIOpts) -> Result<(), AppError> {
      let example_name = cli_opts.example.as_deref();
      match example_name {
        $(
          Some($ex_name) => {
            run_example::<glint_examples::$ex_ident::LocalExample>(cli_opts, $ex_name)
          }
        ),*

        _ => {
          log::error!("no example found");
          show_available_examples();
          Ok(())
        }
      }
    }
  }
}

// Run an example.
fn run_example<E>(cli_opts: CLIOpts, name: &'static str) -> Result<(), AppError>
where
  E: Example,
{
  let mut services = DesktopPlatformServices::new(&cli_opts);

  // First thing first: we create a new surface to render to and get events from.
  let dim = WindowDim::Windowed {
    width: WINDOW_WIDTH,
    height: WINDOW_HEIGHT,
  };
  let title = format!("{}: {}", WINDOW_TITLE, name);
  let win_opt = WindowOpt::default()
    .set_dim(dim)
    .set_cursor_mode(E::cursor_mode());
  let surface = GlfwSurface::new_gl33(&title, win_opt).map_err(AppError::CannotCreateSurface)?;
  let mut context = surface.context;
  let events = surface.events_rx;

  let example = E::bootstrap(&mut services, &mut context)
    .map_err(|e| AppError::CannotBootstrap(name, e))?;
  let start_t = Instant::now();

  // render a first frame with the initial framebuffer size, so that examples set up their
  // viewport and projection
  let [width, height] = context.framebuffer_size();
  let feedback = example.render_frame(
    0.,
    iter::once(InputAction::Resized { width, height }),
    &mut context,
  );
  let mut example = match feedback {
    LoopFeedback::Exit => return Ok(()),
    LoopFeedback::Continue(example) => example,
  };
  context.window.swap_buffers();

  'app: loop {
    // handle events
    context.window.glfw.poll_events();
    let held = HELD_KEYS
      .iter()
      .filter(|(key, _)| context.window.get_key(*key) == Action::Press)
      .map(|&(_, action)| action)
      .collect::<Vec<_>>();
    let actions = glfw::flush_messages(&events)
      .filter_map(|(_, event)| adapt_events(event))
      .chain(held);

    let t = start_t.elapsed().as_secs_f32();
    let feedback = example.render_frame(t, actions, &mut context);

    if let LoopFeedback::Continue(stepped) = feedback {
      example = stepped;
      context.window.swap_buffers();
    } else {
      break 'app;
    }
  }

  Ok(())
}

fn adapt_events(event: WindowEvent) -> Option<InputAction> {
  match event {
    WindowEvent::Close | WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
      Some(InputAction::Quit)
    }

    WindowEvent::Key(key, _, Action::Press, _) => {
      log::debug!("key press: {:?}", key);
      match key {
        Key::M => Some(InputAction::NextMaterial),
        Key::N => Some(InputAction::PreviousMaterial),
        Key::L => Some(InputAction::ToggleLight),
        _ => None,
      }
    }

    WindowEvent::CursorPos(x, y) => Some(InputAction::CursorMoved {
      x: x as _,
      y: y as _,
    }),

    WindowEvent::FramebufferSize(width, height) => Some(InputAction::Resized {
      width: width as _,
      height: height as _,
    }),

    WindowEvent::Scroll(_, amount) => Some(InputAction::VScroll {
      amount: amount as f32,
    }),

    _ => None,
  }
}

examples! {
  "window", window,
  "triangle", triangle,
  "textured-cubes", textured_cubes,
  "lighting", lighting,
}

fn main() {
  env_logger::builder()
    .filter_level(log::LevelFilter::Info)
    .parse_default_env()
    .init();
  let cli_opts = CLIOpts::from_args();

  if cli_opts.list_examples {
    show_available_examples();
  } else if let Err(e) = pick_and_run_example(cli_opts) {
    log::error!("{}", e);
    process::exit(1);
  }
}
