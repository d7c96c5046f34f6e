mod fractal_tree;

pub use fractal_tree::FractalTree;
