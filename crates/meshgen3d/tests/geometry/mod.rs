mod clip_random_triangles;
mod concrete_scenarios;
mod generator_topology;
mod mesh_clip;
mod quad_triangulation;
