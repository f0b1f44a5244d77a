pub mod a001_blog_post;
