//! The fixed fbdev patch sequence for flutter-pi's entry source file.
//!
//! Retargets the renderer from the DRM/OpenGL path to the Flutter software
//! renderer, presenting frames by copying each allocation into the memory
//! mapped from `/dev/fb0`.

use crate::{PatchOp, PatchReport, apply_ops};
use once_cell::sync::Lazy;

/// Anchor for the header injection: the first two lines of the file.
const HEADER_ANCHOR: &str = "#define _GNU_SOURCE\n#include <stdio.h>";

/// Header anchor re-stated, followed by the includes the fbdev block needs.
const HEADER_BLOCK: &str = r#"#define _GNU_SOURCE
#include <stdio.h>
#include <fcntl.h>
#include <sys/mman.h>
#include <linux/fb.h>
"#;

/// Entry-point signature, anchor for both insertions around `main`.
const MAIN_SIGNATURE: &str = "int main(int argc, char **argv) {";

/// Framebuffer globals, the present callback, and `init_fbdev()`, inserted
/// before `main` with the signature re-emitted at the end so the later
/// operations still find it.
const FBDEV_BLOCK: &str = r#"
// FBDEV HACK START
static int fbfd = 0;
static struct fb_var_screeninfo vinfo;
static struct fb_fix_screeninfo finfo;
static char *fbp = 0;

static bool on_software_present(void *userdata, const void *allocation, size_t row_bytes, size_t height) {
    if (!fbp) return false;
    size_t bytes_to_copy = row_bytes * height;
    size_t fb_size = vinfo.yres_virtual * finfo.line_length;
    if (bytes_to_copy > fb_size) bytes_to_copy = fb_size;
    memcpy(fbp, allocation, bytes_to_copy);
    return true;
}

static void init_fbdev() {
    fbfd = open("/dev/fb0", O_RDWR);
    if (fbfd == -1) { perror("Error: cannot open framebuffer device"); exit(1); }
    if (ioctl(fbfd, FBIOGET_FSCREENINFO, &finfo) == -1) { perror("Error reading fixed information"); exit(2); }
    if (ioctl(fbfd, FBIOGET_VSCREENINFO, &vinfo) == -1) { perror("Error reading variable information"); exit(3); }
    long screensize = vinfo.yres_virtual * finfo.line_length;
    fbp = (char *)mmap(0, screensize, PROT_READ | PROT_WRITE, MAP_SHARED, fbfd, 0);
    if ((int)fbp == -1) { perror("Error: failed to map framebuffer device to memory"); exit(4); }
    printf("FBDEV Initialized: %dx%d, %dbpp\n", vinfo.xres, vinfo.yres, vinfo.bits_per_pixel);
}
// FBDEV HACK END

int main(int argc, char **argv) {
"#;

/// Signature re-stated with the init call appended. Must run after the
/// fbdev block insertion: it rewrites the signature occurrence that block
/// re-emitted.
const INIT_CALL: &str = "int main(int argc, char **argv) {\n    init_fbdev();";

/// Start marker of the renderer-config span.
const CONFIG_START: &str = "FlutterRendererConfig config = {0};";

/// End marker of the renderer-config span. Whatever the build previously put
/// between the markers is variable, so the whole span is replaced rather than
/// anchored into.
const CONFIG_END: &str = "FlutterProjectArgs args";

/// Both markers re-stated with the software-renderer selection between them.
/// `on_software_present` here must match the callback defined in
/// [`FBDEV_BLOCK`]; the produced C will not compile otherwise.
const CONFIG_BLOCK: &str = r#"FlutterRendererConfig config = {0};
    config.type = kSoftware;
    config.software.struct_size = sizeof(FlutterSoftwareRendererConfig);
    config.software.surface_present_callback = on_software_present;

    // config.open_gl.struct_size = sizeof(FlutterOpenGLRendererConfig);
    // config.open_gl.make_current = on_make_current;
    // config.open_gl.clear_current = on_clear_current;
    // config.open_gl.present = on_present;
    // config.open_gl.fbo_callback = fbo_callback;
    // config.open_gl.make_resource_current = on_make_resource_current;

    FlutterProjectArgs args"#;

/// DRM setup calls turned into comments; the fbdev path replaces them.
const DISABLE_SETUP_PATHS: &str = "ok = setup_paths(&flutterpi);";
const DISABLE_SETUP_CONFIG: &str = "ok = setup_config(&flutterpi);";

static OPS: Lazy<Vec<PatchOp>> = Lazy::new(|| {
	vec![
		PatchOp::Replace {
			label: "inject fbdev headers",
			needle: HEADER_ANCHOR,
			replacement: HEADER_BLOCK,
		},
		PatchOp::Replace {
			label: "insert fbdev block before main",
			needle: MAIN_SIGNATURE,
			replacement: FBDEV_BLOCK,
		},
		PatchOp::Replace {
			label: "insert init_fbdev call in main",
			needle: MAIN_SIGNATURE,
			replacement: INIT_CALL,
		},
		PatchOp::span(
			"replace renderer config with software renderer",
			CONFIG_START,
			CONFIG_END,
			CONFIG_BLOCK,
		)
		.unwrap(),
		PatchOp::Disable {
			label: "disable setup_paths",
			stmt: DISABLE_SETUP_PATHS,
		},
		PatchOp::Disable {
			label: "disable setup_config",
			stmt: DISABLE_SETUP_CONFIG,
		},
	]
});

/// The fbdev patch sequence, in application order.
///
/// Order is a hard dependency: the init-call insertion rewrites the signature
/// re-emitted by the fbdev block insertion.
pub fn patch_ops() -> &'static [PatchOp] {
	&OPS
}

/// Applies the full fbdev patch sequence to `content`.
///
/// Pure function of its input; file I/O is the caller's concern. Operations
/// whose anchor is absent leave the text unchanged (see [`PatchOp::apply`]).
pub fn patch(content: &str) -> String {
	patch_with_report(content).0
}

/// Same as [`patch`], but also returns the per-operation report.
pub fn patch_with_report(content: &str) -> (String, PatchReport) {
	apply_ops(patch_ops(), content)
}
