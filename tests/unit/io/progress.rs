//! Tests for the render progress bar

#[cfg(test)]
mod tests {
    use gridcollage::io::progress::RenderProgress;

    // Tests advancing moves the position by one per placement
    // Verified by advancing by the label length
    #[test]
    fn test_hidden_progress_counts() {
        let progress = RenderProgress::hidden();

        progress.start(3);
        progress.advance("a.jpg");
        progress.advance("b.jpg");

        assert_eq!(progress.position(), 2);
        progress.finish();
    }

    // Tests starting again resets the position
    // Verified by keeping the previous position
    #[test]
    fn test_start_resets() {
        let progress = RenderProgress::new("Rendering");

        progress.start(2);
        progress.advance("a.jpg");
        progress.start(5);

        assert_eq!(progress.position(), 0);
        progress.finish();
    }
}
