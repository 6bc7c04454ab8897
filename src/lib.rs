pub use m3d_math as math;
